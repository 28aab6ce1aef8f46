//! Lane-marking extraction: smoothing, edge detection, ROI masking, and
//! probabilistic line-segment extraction with geometric filtering.

use crate::detector::params::LaneParams;
use crate::edges::canny;
use crate::filters::gaussian_blur_5x5;
use crate::hough::probabilistic_hough;
use crate::image::ImageU8;
use crate::roi::{apply_mask, lane_roi_polygon, polygon_mask};
use crate::types::LaneMarking;
use log::debug;

/// Detects straight lane-marking segments in a single intensity plane.
///
/// Near-horizontal is the expected orientation for markings seen by a
/// forward-facing camera; steep segments are rejected as verticals or
/// noise. Confidence grows linearly with segment length and saturates at
/// [`LaneParams::full_confidence_length`].
pub struct LaneMarkingDetector {
    params: LaneParams,
}

impl LaneMarkingDetector {
    pub fn new() -> Self {
        Self::with_params(LaneParams::default())
    }

    pub fn with_params(params: LaneParams) -> Self {
        Self { params }
    }

    /// Extract lane markings. Returns an empty vec when nothing qualifies;
    /// never fails for a valid plane.
    pub fn detect(&self, gray: ImageU8) -> Vec<LaneMarking> {
        let w = gray.w;
        let h = gray.h;
        if w == 0 || h == 0 {
            return Vec::new();
        }

        let blurred = gaussian_blur_5x5(gray);
        let mut edge_map = canny(
            blurred.as_view(),
            self.params.edge_low,
            self.params.edge_high,
        );
        let roi = polygon_mask(w, h, &lane_roi_polygon(w, h));
        apply_mask(&mut edge_map, roi.as_view());

        let segments = probabilistic_hough(edge_map.as_view(), &self.params.hough);
        let candidates = segments.len();

        let mut markings = Vec::new();
        for seg in segments {
            let length = seg.length();
            let angle = seg.angle_deg();
            if length > self.params.min_length && angle.abs() < self.params.max_angle_deg {
                let confidence =
                    (length / self.params.full_confidence_length).clamp(0.0, 1.0);
                markings.push(LaneMarking {
                    confidence,
                    coordinates: [seg.x1, seg.y1, seg.x2, seg.y2],
                    length,
                    angle,
                });
            }
        }

        debug!(
            "lanes: {candidates} candidate segments, {} accepted",
            markings.len()
        );
        markings
    }
}

impl Default for LaneMarkingDetector {
    fn default() -> Self {
        Self::new()
    }
}
