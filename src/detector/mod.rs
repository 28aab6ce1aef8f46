//! Road-surface feature detectors and their orchestration.
//!
//! Overview
//! - [`LaneMarkingDetector`] extracts straight lane-marking segments:
//!   Gaussian smoothing, two-threshold edge detection, a lower-half
//!   trapezoidal ROI mask, probabilistic Hough line extraction, then a
//!   length/angle filter with length-saturating confidence.
//! - [`RoadDamageDetector`] extracts damage blobs: top-hat/black-hat
//!   anomaly enhancement with an elliptical element, binary thresholding,
//!   connected-region extraction, and an area-driven severity grade.
//! - [`FrameProcessor`] runs both extractors over one frame and stamps the
//!   merged detections with a shared timestamp and sequential ids.
//! - [`SequenceProcessor`] samples every Nth frame of an ordered sequence
//!   and attaches frame ordinals.
//!
//! Modules
//! - [`params`] – configuration types used by the detectors and CLI tools.
//! - `lanes` / `damage` – the two extractors.
//! - `pipeline` – frame/sequence orchestration.
//!
//! Neither extractor depends on the other's output, and no state is kept
//! between calls; every `process` invocation is a pure function of its
//! input frame plus wall-clock time (used only for the timestamp field).

pub mod damage;
pub mod lanes;
pub mod params;
pub mod pipeline;

pub use damage::RoadDamageDetector;
pub use lanes::LaneMarkingDetector;
pub use params::{DamageParams, DetectorParams, LaneParams, SequenceParams};
pub use pipeline::{FrameProcessor, SequenceProcessor};
