//! Frame and sequence orchestration.
//!
//! [`FrameProcessor`] runs both extractors against one frame and merges
//! their output into the flat detection list handed to callers:
//!
//! - the two extractors are independent and run concurrently via
//!   `rayon::join`; lane markings precede damage regions in the output,
//! - one timestamp is captured per call and every detection is stamped
//!   with it plus a sequential `"{timestamp}_{index}"` id.
//!
//! [`SequenceProcessor`] drives the frame processor across an ordered
//! frame sequence with fixed-interval sampling, attaching each sampled
//! frame's ordinal to its detections. Full coverage is deliberately
//! skipped: markings and damage persist across many consecutive frames.
//!
//! Both processors are stateless between calls; concurrent invocations
//! over independent frames need no coordination.

use crate::detector::params::{DetectorParams, SequenceParams};
use crate::detector::{LaneMarkingDetector, RoadDamageDetector};
use crate::error::DetectError;
use crate::image::{ImageRgb8, RgbImageU8};
use crate::types::{Detection, Feature};
use chrono::Local;
use log::{debug, warn};
use std::time::Instant;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Runs both extractors over one frame and annotates the merged output.
pub struct FrameProcessor {
    lanes: LaneMarkingDetector,
    damage: RoadDamageDetector,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self::with_params(DetectorParams::default())
    }

    pub fn with_params(params: DetectorParams) -> Self {
        Self {
            lanes: LaneMarkingDetector::with_params(params.lanes),
            damage: RoadDamageDetector::with_params(params.damage),
        }
    }

    /// Process a single frame.
    ///
    /// A zero-sized frame is structurally invalid and yields
    /// [`DetectError::InvalidInput`]; any other frame produces a (possibly
    /// empty) detection list.
    pub fn process(&self, frame: ImageRgb8<'_>) -> Result<Vec<Detection>, DetectError> {
        if frame.w == 0 || frame.h == 0 {
            return Err(DetectError::InvalidInput(format!(
                "zero-sized frame ({}x{})",
                frame.w, frame.h
            )));
        }

        let start = Instant::now();
        let gray = frame.to_gray();
        let (lane_markings, damage_regions) = rayon::join(
            || self.lanes.detect(gray.as_view()),
            || self.damage.detect(gray.as_view()),
        );

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let detections: Vec<Detection> = lane_markings
            .into_iter()
            .map(Feature::LaneMarking)
            .chain(damage_regions.into_iter().map(Feature::RoadDamage))
            .enumerate()
            .map(|(index, feature)| Detection {
                id: format!("{timestamp}_{index}"),
                timestamp: timestamp.clone(),
                frame_number: None,
                feature,
            })
            .collect();

        debug!(
            "frame {}x{}: {} detections in {:.1} ms",
            frame.w,
            frame.h,
            detections.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(detections)
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the frame processor across an ordered frame sequence.
pub struct SequenceProcessor {
    frame: FrameProcessor,
    params: SequenceParams,
}

impl SequenceProcessor {
    pub fn new() -> Self {
        Self::with_params(DetectorParams::default(), SequenceParams::default())
    }

    pub fn with_params(detector: DetectorParams, params: SequenceParams) -> Self {
        Self {
            frame: FrameProcessor::with_params(detector),
            params,
        }
    }

    /// Process every `frame_stride`-th frame; the rest are skipped without
    /// any processing cost. Each detection carries its frame's ordinal.
    ///
    /// Invalid frames are skipped with a warning rather than aborting the
    /// run; they still consume their ordinal.
    pub fn process<I>(&self, frames: I) -> Vec<Detection>
    where
        I: IntoIterator<Item = RgbImageU8>,
    {
        let stride = self.params.frame_stride.max(1);
        let mut all = Vec::new();
        for (ordinal, frame) in frames.into_iter().enumerate() {
            if ordinal % stride != 0 {
                continue;
            }
            match self.frame.process(frame.as_view()) {
                Ok(mut detections) => {
                    for det in &mut detections {
                        det.frame_number = Some(ordinal as u64);
                    }
                    all.extend(detections);
                }
                Err(err) => warn!("skipping frame {ordinal}: {err}"),
            }
        }
        all
    }
}

impl Default for SequenceProcessor {
    fn default() -> Self {
        Self::new()
    }
}
