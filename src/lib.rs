#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod error;
pub mod image;
pub mod types;

// Vision building blocks – still public, but considered unstable internals.
pub mod edges;
pub mod filters;
pub mod hough;
pub mod morphology;
pub mod regions;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

// Main entry points: processors + results.
pub use crate::detector::{FrameProcessor, LaneMarkingDetector, RoadDamageDetector, SequenceProcessor};
pub use crate::error::DetectError;
pub use crate::types::{Detection, DetectionStats, Feature, LaneMarking, RoadDamage, Severity};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use road_detector::prelude::*;
///
/// let frame = RgbImageU8::new(320, 240, vec![0u8; 320 * 240 * 3]);
/// let processor = FrameProcessor::new();
/// let detections = processor.process(frame.as_view()).unwrap();
/// assert!(detections.is_empty());
/// ```
pub mod prelude {
    pub use crate::detector::{FrameProcessor, SequenceProcessor};
    pub use crate::image::{ImageRgb8, RgbImageU8};
    pub use crate::types::{Detection, DetectionStats, Feature, Severity};
}
