use anyhow::{Context, Result};
use road_detector::config::detect_image::ImageToolConfig;
use road_detector::config::load_config;
use road_detector::image::io::{load_rgb_image, write_json_file};
use road_detector::{DetectionStats, FrameProcessor};
use std::env;
use std::path::Path;

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
        .context("Usage: detect_image <config.json>")?;
    let config: ImageToolConfig = load_config(Path::new(&config_path))?;

    let frame = load_rgb_image(&config.input)?;
    let processor = FrameProcessor::with_params(config.detector);
    let detections = processor
        .process(frame.as_view())
        .with_context(|| format!("processing {}", config.input.display()))?;

    write_json_file(&config.output, &detections)?;

    let stats = DetectionStats::collect(&detections);
    println!(
        "{}: {} detections ({} lane markings, {} damage regions, {} high severity) -> {}",
        config.input.display(),
        stats.total_detections,
        stats.lane_markings,
        stats.road_damage,
        stats.high_severity,
        config.output.display()
    );

    Ok(())
}
