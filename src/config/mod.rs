//! JSON configuration for the demo tools.

pub mod detect_frames;
pub mod detect_image;

use crate::error::DetectError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON tool config.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, DetectError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
