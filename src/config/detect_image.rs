use crate::detector::params::DetectorParams;
use serde::Deserialize;
use std::path::PathBuf;

/// Config for the single-image tool.
#[derive(Debug, Deserialize)]
pub struct ImageToolConfig {
    /// Image file to process.
    pub input: PathBuf,
    /// Destination for the detection list (pretty JSON).
    pub output: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
}
