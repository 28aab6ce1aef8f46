//! Surface-damage extraction: morphological anomaly enhancement,
//! thresholding, and connected-region grading.

use crate::detector::params::DamageParams;
use crate::image::ImageU8;
use crate::morphology::{add_saturating, black_hat, elliptical_kernel, threshold_binary, top_hat};
use crate::regions::connected_regions;
use crate::types::{RoadDamage, Severity};
use log::debug;

/// Detects element-scale surface anomalies and grades them by area.
///
/// Cracks and pits appear dark against the asphalt, patched material
/// bright; summing the top-hat and black-hat residuals captures both in
/// one enhancement map. Regions at or below [`DamageParams::min_area`]
/// are treated as noise. The area floor also guarantees `aspect_ratio`
/// and `extent` are computed over non-degenerate boxes.
pub struct RoadDamageDetector {
    params: DamageParams,
    kernel: Vec<(i32, i32)>,
}

impl RoadDamageDetector {
    pub fn new() -> Self {
        Self::with_params(DamageParams::default())
    }

    pub fn with_params(params: DamageParams) -> Self {
        let kernel = elliptical_kernel(params.kernel_size);
        Self { params, kernel }
    }

    /// Severity as a step function of region area, strict at both
    /// thresholds.
    pub fn severity_for_area(&self, area: f32) -> Severity {
        if area > self.params.high_area {
            Severity::High
        } else if area > self.params.medium_area {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Extract damage regions. Returns an empty vec for a region-free
    /// frame; never fails for a valid plane.
    pub fn detect(&self, gray: ImageU8) -> Vec<RoadDamage> {
        if gray.w == 0 || gray.h == 0 {
            return Vec::new();
        }

        let bright = top_hat(gray.clone(), &self.kernel);
        let dark = black_hat(gray, &self.kernel);
        let enhanced = add_saturating(&bright, &dark);
        let mask = threshold_binary(enhanced.as_view(), self.params.enhance_thresh);

        let regions = connected_regions(mask.as_view());
        let candidates = regions.len();

        let mut detections = Vec::new();
        for region in regions {
            let area = region.area as f32;
            if area <= self.params.min_area {
                continue;
            }
            let aspect_ratio = region.w as f32 / region.h as f32;
            let extent = area / (region.w as f32 * region.h as f32);
            detections.push(RoadDamage {
                confidence: (area / self.params.full_confidence_area).clamp(0.0, 1.0),
                bbox: region.bbox(),
                area,
                severity: self.severity_for_area(area),
                aspect_ratio,
                extent,
            });
        }

        debug!(
            "damage: {candidates} candidate regions, {} above the noise floor",
            detections.len()
        );
        detections
    }
}

impl Default for RoadDamageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    /// Fill a square with a 2×2-block checker of bright and dark cells,
    /// mimicking the texture of broken surface material.
    fn speckle_patch(img: &mut GrayImageU8, x0: usize, y0: usize, side: usize) {
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                let v = if ((x - x0) / 2 + (y - y0) / 2) % 2 == 0 {
                    160
                } else {
                    40
                };
                img.set(x, y, v);
            }
        }
    }

    #[test]
    fn small_patch_grades_low() {
        let mut img = GrayImageU8::zeroed(128, 128);
        speckle_patch(&mut img, 40, 40, 16);
        let detector = RoadDamageDetector::new();
        let detections = detector.detect(img.as_view());
        assert!(!detections.is_empty());
        let biggest = detections
            .iter()
            .max_by(|a, b| a.area.partial_cmp(&b.area).unwrap())
            .unwrap();
        assert_eq!(biggest.severity, Severity::Low);
        assert!(biggest.area > 100.0 && biggest.area <= 500.0, "area {}", biggest.area);
        assert!(detections.iter().all(|d| d.area <= 500.0));
    }

    #[test]
    fn large_patch_grades_high() {
        let mut img = GrayImageU8::zeroed(128, 128);
        speckle_patch(&mut img, 30, 30, 40);
        let detector = RoadDamageDetector::new();
        let detections = detector.detect(img.as_view());
        let biggest = detections
            .iter()
            .max_by(|a, b| a.area.partial_cmp(&b.area).unwrap())
            .expect("patch must be detected");
        assert_eq!(biggest.severity, Severity::High);
        assert!(biggest.confidence > 0.5 && biggest.confidence <= 1.0);
        let [x, y, w, h] = biggest.bbox;
        assert!(x <= 50 && y <= 50 && x + w >= 50 && y + h >= 50, "bbox must cover the patch center");
        assert!(biggest.extent > 0.0 && biggest.extent <= 1.0);
        assert!(biggest.aspect_ratio > 0.0);
    }

    #[test]
    fn tiny_speckle_stays_below_the_noise_floor() {
        let mut img = GrayImageU8::zeroed(64, 64);
        speckle_patch(&mut img, 30, 30, 6);
        let detector = RoadDamageDetector::new();
        assert!(detector.detect(img.as_view()).is_empty());
    }

    #[test]
    fn flat_surface_yields_nothing() {
        let img = GrayImageU8::new(64, 64, vec![128u8; 64 * 64]);
        let detector = RoadDamageDetector::new();
        assert!(detector.detect(img.as_view()).is_empty());
    }

    #[test]
    fn severity_thresholds_are_strict() {
        let detector = RoadDamageDetector::new();
        assert_eq!(detector.severity_for_area(400.0), Severity::Low);
        assert_eq!(detector.severity_for_area(500.0), Severity::Low);
        assert_eq!(detector.severity_for_area(500.5), Severity::Medium);
        assert_eq!(detector.severity_for_area(1000.0), Severity::Medium);
        assert_eq!(detector.severity_for_area(1000.5), Severity::High);
    }
}
