//! Gradient computation and two-threshold edge detection.
//!
//! The edge map feeding the lane extractor comes from a Canny-style chain:
//!
//! - 3×3 Sobel gradients over the (pre-smoothed) intensity plane, with L2
//!   magnitude.
//! - Non-maximum suppression along the quantized gradient direction (4
//!   direction bins), thinning ridges to single-pixel width. Ties along the
//!   direction are broken toward the earlier pixel so a symmetric step
//!   still yields one edge column.
//! - Hysteresis linking: pixels at or above `high` seed edges; pixels at or
//!   above `low` survive only when 8-connected to a seed through other
//!   survivors.
//!
//! Thresholds are expressed on the raw Sobel magnitude scale (an intensity
//! step of Δ across a sharp edge produces a magnitude of roughly 4Δ).
use crate::image::{GrayImageU8, ImageF32, ImageU8};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

#[derive(Clone, Debug)]
pub struct Grad {
    pub gx: ImageF32,
    pub gy: ImageF32,
    pub mag: ImageF32,
}

/// 3×3 Sobel gradients of an 8-bit intensity plane, replicated borders.
pub fn sobel_gradients(l: ImageU8) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, &yy) in y_idx.iter().enumerate() {
                let kernel_row_x = &SOBEL_KERNEL_X[ky];
                let kernel_row_y = &SOBEL_KERNEL_Y[ky];
                for (xx, (&kx_weight, &ky_weight)) in x_idx
                    .iter()
                    .zip(kernel_row_x.iter().zip(kernel_row_y.iter()))
                {
                    let sample = f32::from(l.get(*xx, yy));
                    sum_x += sample * kx_weight;
                    sum_y += sample * ky_weight;
                }
            }

            gx.set(x, y, sum_x);
            gy.set(x, y, sum_y);
            mag.set(x, y, (sum_x * sum_x + sum_y * sum_y).sqrt());
        }
    }

    Grad { gx, gy, mag }
}

const STATUS_NONE: u8 = 0;
const STATUS_WEAK: u8 = 1;
const STATUS_STRONG: u8 = 2;

/// Two-threshold edge detector producing a 0/255 binary edge mask.
pub fn canny(l: ImageU8, low: f32, high: f32) -> GrayImageU8 {
    let w = l.w;
    let h = l.h;
    let mut out = GrayImageU8::zeroed(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let grad = sobel_gradients(l);
    let mut status = vec![STATUS_NONE; w * h];
    let mut seeds = Vec::new();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mag = grad.mag.get(x, y);
            if mag < low {
                continue;
            }

            let gx = grad.gx.get(x, y);
            let gy = grad.gy.get(x, y);
            let mut angle_deg = gy.atan2(gx).to_degrees();
            if angle_deg < 0.0 {
                angle_deg += 180.0;
            }

            let (n1x, n1y, n2x, n2y) = if !(22.5..157.5).contains(&angle_deg) {
                (x - 1, y, x + 1, y)
            } else if angle_deg < 67.5 {
                (x + 1, y - 1, x - 1, y + 1)
            } else if angle_deg < 112.5 {
                (x, y - 1, x, y + 1)
            } else {
                (x - 1, y - 1, x + 1, y + 1)
            };

            // keep on ties against the later neighbor only, so symmetric
            // ridges thin to a single pixel
            if mag <= grad.mag.get(n1x, n1y) || mag < grad.mag.get(n2x, n2y) {
                continue;
            }

            let idx = y * w + x;
            if mag >= high {
                status[idx] = STATUS_STRONG;
                seeds.push(idx);
            } else {
                status[idx] = STATUS_WEAK;
            }
        }
    }

    // hysteresis: grow strong seeds into 8-connected weak survivors
    let mut stack = seeds;
    while let Some(idx) = stack.pop() {
        out.as_bytes_mut()[idx] = 255;
        let x = idx % w;
        let y = idx / w;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let xn = x as i32 + dx;
                let yn = y as i32 + dy;
                if xn < 0 || yn < 0 || xn >= w as i32 || yn >= h as i32 {
                    continue;
                }
                let nidx = yn as usize * w + xn as usize;
                if status[nidx] == STATUS_WEAK && out.as_bytes()[nidx] == 0 {
                    status[nidx] = STATUS_STRONG;
                    stack.push(nidx);
                }
            }
        }
    }

    out
}
