use anyhow::{Context, Result};
use road_detector::config::detect_frames::FramesToolConfig;
use road_detector::config::load_config;
use road_detector::image::io::{load_rgb_image, write_json_file};
use road_detector::image::RgbImageU8;
use road_detector::{DetectionStats, SequenceProcessor};
use std::env;
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .context("Usage: detect_frames <config.json>")?;
    let config: FramesToolConfig = load_config(Path::new(&config_path))?;

    let frame_paths = list_frames(&config.frames_dir)?;
    anyhow::ensure!(
        !frame_paths.is_empty(),
        "no frames found in {}",
        config.frames_dir.display()
    );

    let frames = frame_paths
        .iter()
        .map(|path| load_rgb_image(path))
        .collect::<Result<Vec<RgbImageU8>, _>>()?;

    let processor = SequenceProcessor::with_params(config.detector, config.sequence);
    let detections = processor.process(frames);

    write_json_file(&config.output, &detections)?;

    let stats = DetectionStats::collect(&detections);
    println!(
        "{} frames: {} detections ({} lane markings, {} damage regions, {} high severity) -> {}",
        frame_paths.len(),
        stats.total_detections,
        stats.lane_markings,
        stats.road_damage,
        stats.high_severity,
        config.output.display()
    );

    Ok(())
}

/// Frame files in the directory, ordered by file name.
fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        let is_frame = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if is_frame {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
