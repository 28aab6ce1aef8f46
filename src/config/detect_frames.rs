use crate::detector::params::{DetectorParams, SequenceParams};
use serde::Deserialize;
use std::path::PathBuf;

/// Config for the frame-sequence tool.
#[derive(Debug, Deserialize)]
pub struct FramesToolConfig {
    /// Directory of still frames, ordered by file name.
    pub frames_dir: PathBuf,
    /// Destination for the detection list (pretty JSON).
    pub output: PathBuf,
    #[serde(default)]
    pub sequence: SequenceParams,
    #[serde(default)]
    pub detector: DetectorParams,
}
