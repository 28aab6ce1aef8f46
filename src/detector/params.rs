//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the reference tuning for forward-facing road footage
//! at common resolutions. All types deserialize with per-field defaults so
//! tool configs may override any subset.

use crate::hough::HoughParams;
use serde::{Deserialize, Serialize};

/// Knobs for the lane-marking extractor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Lower hysteresis threshold of the edge detector (Sobel magnitude).
    pub edge_low: f32,
    /// Upper hysteresis threshold of the edge detector.
    pub edge_high: f32,
    /// Accumulator configuration for line-segment extraction.
    pub hough: HoughParams,
    /// Minimum accepted segment length in pixels.
    pub min_length: f32,
    /// Maximum |angle| in degrees; steeper segments are rejected.
    pub max_angle_deg: f32,
    /// Segment length at which confidence saturates to 1.
    pub full_confidence_length: f32,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            edge_low: 50.0,
            edge_high: 150.0,
            hough: HoughParams::default(),
            min_length: 50.0,
            max_angle_deg: 45.0,
            full_confidence_length: 200.0,
        }
    }
}

/// Knobs for the surface-damage extractor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageParams {
    /// Side length of the elliptical structuring element (odd).
    pub kernel_size: usize,
    /// Binary threshold over the summed top-hat/black-hat map.
    pub enhance_thresh: u8,
    /// Noise floor: regions at or below this area are discarded.
    pub min_area: f32,
    /// Areas strictly above this grade at least medium.
    pub medium_area: f32,
    /// Areas strictly above this grade high.
    pub high_area: f32,
    /// Region area at which confidence saturates to 1.
    pub full_confidence_area: f32,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            enhance_thresh: 30,
            min_area: 100.0,
            medium_area: 500.0,
            high_area: 1000.0,
            full_confidence_area: 2000.0,
        }
    }
}

/// Parameters shared by one frame-processing pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    pub lanes: LaneParams,
    pub damage: DamageParams,
}

/// Sampling configuration for the sequence processor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceParams {
    /// Process every `frame_stride`-th frame (ordinals 0, s, 2s, ...).
    pub frame_stride: usize,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self { frame_stride: 10 }
    }
}
