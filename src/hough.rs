//! Probabilistic Hough transform extracting line segments from a binary
//! edge map.
//!
//! The extractor follows the progressive probabilistic formulation:
//!
//! - Edge pixels are visited in a shuffled order. Each visited pixel that
//!   is still available votes into a (theta, rho) accumulator over the full
//!   angle range.
//! - When a pixel's best bin reaches the vote threshold, the image is
//!   walked along that bin's line direction in both directions from the
//!   pixel, bridging runs of missing edge pixels up to `max_line_gap`
//!   steps. The walk's extremes become candidate endpoints.
//! - Pixels on the walked corridor are consumed: they are removed from the
//!   available set and, when a segment is emitted, their accumulator votes
//!   are withdrawn so one physical line cannot trigger twice.
//! - The candidate is emitted only when its Euclidean endpoint distance
//!   reaches `min_line_length`.
//!
//! The shuffle uses a fixed-seed [`SmallRng`], so the output is a pure
//! function of the input map. Walking uses 16-bit fixed-point stepping
//! along the dominant axis, giving 8-connected line coverage.
//!
//! Complexity is O(P·A) votes for P edge pixels and A angle bins, plus the
//! walked corridors; the vote threshold keeps corridor work proportional
//! to the number of real lines.
use crate::image::ImageU8;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Fixed shuffle seed: detection content must be deterministic per input.
const SAMPLE_SEED: u64 = 0x6c61_6e65;

const SHIFT: i32 = 16;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angle resolution of the accumulator in degrees.
    pub theta_step_deg: f32,
    /// Minimum accumulator votes before a candidate line is traced.
    pub threshold: i32,
    /// Minimum Euclidean endpoint distance of an emitted segment.
    pub min_line_length: f32,
    /// Maximum run of missing edge pixels bridged while tracing.
    pub max_line_gap: f32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_step_deg: 1.0,
            threshold: 50,
            min_line_length: 100.0,
            max_line_gap: 50.0,
        }
    }
}

/// A line segment with integer pixel endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Signed angle in degrees, range (-180, 180].
    pub fn angle_deg(&self) -> f32 {
        let dy = (self.y2 - self.y1) as f32;
        let dx = (self.x2 - self.x1) as f32;
        dy.atan2(dx).to_degrees()
    }
}

/// Extract line segments from a 0/255 edge map.
pub fn probabilistic_hough(edges: ImageU8, params: &HoughParams) -> Vec<LineSegment> {
    let w = edges.w;
    let h = edges.h;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let theta_step = params.theta_step_deg.max(0.01).to_radians();
    let numangle = (std::f32::consts::PI / theta_step).round().max(1.0) as usize;
    let numrho = (((w + h) as f32 * 2.0 + 1.0) / params.rho.max(0.01)).round() as usize;
    let rho_offset = ((numrho - 1) / 2) as i32;
    let irho = 1.0 / params.rho.max(0.01);
    let max_gap = params.max_line_gap.round().max(0.0) as i32;

    let tcos: Vec<f32> = (0..numangle).map(|n| (n as f32 * theta_step).cos()).collect();
    let tsin: Vec<f32> = (0..numangle).map(|n| (n as f32 * theta_step).sin()).collect();

    let mut mask = vec![false; w * h];
    let mut points: Vec<(i32, i32)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if edges.get(x, y) != 0 {
                mask[y * w + x] = true;
                points.push((x as i32, y as i32));
            }
        }
    }

    let mut rng = SmallRng::seed_from_u64(SAMPLE_SEED);
    points.shuffle(&mut rng);

    let mut accum = vec![0i32; numangle * numrho];
    let mut voted = vec![false; w * h];
    let mut segments = Vec::new();

    for &(px, py) in &points {
        let pidx = py as usize * w + px as usize;
        if !mask[pidx] {
            continue;
        }

        voted[pidx] = true;
        let mut best_votes = params.threshold - 1;
        let mut best_n = None;
        for n in 0..numangle {
            let r = (px as f32 * tcos[n] * irho + py as f32 * tsin[n] * irho).round() as i32
                + rho_offset;
            debug_assert!((0..numrho as i32).contains(&r));
            let bin = n * numrho + r as usize;
            accum[bin] += 1;
            if accum[bin] > best_votes {
                best_votes = accum[bin];
                best_n = Some(n);
            }
        }
        let Some(best_n) = best_n else { continue };

        // direction of the line whose normal is at angle best_n
        let a = -tsin[best_n];
        let b = tcos[best_n];
        let (mut x0, mut y0) = (px, py);
        let (dx0, dy0, xflag);
        if a.abs() > b.abs() {
            xflag = true;
            dx0 = if a > 0.0 { 1 } else { -1 };
            dy0 = (b * (1 << SHIFT) as f32 / a.abs()).round() as i32;
            y0 = (y0 << SHIFT) + (1 << (SHIFT - 1));
        } else {
            xflag = false;
            dy0 = if b > 0.0 { 1 } else { -1 };
            dx0 = (a * (1 << SHIFT) as f32 / b.abs()).round() as i32;
            x0 = (x0 << SHIFT) + (1 << (SHIFT - 1));
        }

        // trace outward in both directions, bridging gaps
        let mut line_end = [(px, py); 2];
        for k in 0..2 {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (x0, y0);
            let mut gap = 0;
            loop {
                let (j, i) = if xflag { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                if j < 0 || j >= w as i32 || i < 0 || i >= h as i32 {
                    break;
                }
                if mask[i as usize * w + j as usize] {
                    gap = 0;
                    line_end[k] = (j, i);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                x += dx;
                y += dy;
            }
        }

        let seg = LineSegment {
            x1: line_end[0].0,
            y1: line_end[0].1,
            x2: line_end[1].0,
            y2: line_end[1].1,
        };
        let good_line = seg.length() >= params.min_line_length;

        // consume the corridor: clear traced pixels and withdraw their votes
        // when the line is emitted
        for k in 0..2 {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (x0, y0);
            loop {
                let (j, i) = if xflag { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                let idx = i as usize * w + j as usize;
                if mask[idx] {
                    mask[idx] = false;
                    if good_line && voted[idx] {
                        voted[idx] = false;
                        for n in 0..numangle {
                            let r = (j as f32 * tcos[n] * irho + i as f32 * tsin[n] * irho)
                                .round() as i32
                                + rho_offset;
                            accum[n * numrho + r as usize] -= 1;
                        }
                    }
                }
                if (j, i) == line_end[k] {
                    break;
                }
                x += dx;
                y += dy;
            }
        }

        if good_line {
            segments.push(seg);
        }
    }

    debug!(
        "hough: {} edge points -> {} segments",
        points.len(),
        segments.len()
    );
    segments
}
