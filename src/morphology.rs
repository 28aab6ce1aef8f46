//! Grayscale morphology for surface-anomaly enhancement.
//!
//! Road damage shows up as small local deviations from the surrounding
//! surface intensity: cracks and pits darker than the asphalt, patched
//! material brighter. The damage path therefore combines
//!
//! - **top-hat** (`src − open(src)`): small bright structures, and
//! - **black-hat** (`close(src) − src`): small dark structures,
//!
//! both computed with an elliptical structuring element, and sums the two
//! with saturation into one enhancement map. Structures wider than the
//! element in every direction survive opening/closing and vanish from the
//! residuals; only element-scale anomalies remain.
//!
//! Erosion and dilation ignore out-of-image samples, which matches padding
//! with the identity extreme on each side.
use crate::image::{GrayImageU8, ImageU8};

/// Offsets of an elliptical structuring element inscribed in `size × size`
/// (odd size). For size 5 this is the 17-pixel digital ellipse.
pub fn elliptical_kernel(size: usize) -> Vec<(i32, i32)> {
    debug_assert!(size % 2 == 1 && size >= 1);
    let r = (size / 2) as i32;
    let inv_r2 = if r > 0 { 1.0 / (r * r) as f32 } else { 0.0 };
    let mut offsets = Vec::new();
    for dy in -r..=r {
        let dx_max = if r > 0 {
            let t = 1.0 - (dy * dy) as f32 * inv_r2;
            (r as f32 * t.max(0.0).sqrt()).round() as i32
        } else {
            0
        };
        for dx in -dx_max..=dx_max {
            offsets.push((dx, dy));
        }
    }
    offsets
}

fn morph_extreme(src: ImageU8, kernel: &[(i32, i32)], take_max: bool) -> GrayImageU8 {
    let w = src.w;
    let h = src.h;
    let mut out = GrayImageU8::zeroed(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = if take_max { 0u8 } else { 255u8 };
            for &(dx, dy) in kernel {
                let xn = x as i32 + dx;
                let yn = y as i32 + dy;
                if xn < 0 || yn < 0 || xn >= w as i32 || yn >= h as i32 {
                    continue;
                }
                let v = src.get(xn as usize, yn as usize);
                acc = if take_max { acc.max(v) } else { acc.min(v) };
            }
            out.set(x, y, acc);
        }
    }
    out
}

pub fn erode(src: ImageU8, kernel: &[(i32, i32)]) -> GrayImageU8 {
    morph_extreme(src, kernel, false)
}

pub fn dilate(src: ImageU8, kernel: &[(i32, i32)]) -> GrayImageU8 {
    morph_extreme(src, kernel, true)
}

/// `src − open(src)`, saturating: bright element-scale structures.
pub fn top_hat(src: ImageU8, kernel: &[(i32, i32)]) -> GrayImageU8 {
    let opened = dilate(erode(src.clone(), kernel).as_view(), kernel);
    let mut out = GrayImageU8::zeroed(src.w, src.h);
    for y in 0..src.h {
        for x in 0..src.w {
            out.set(x, y, src.get(x, y).saturating_sub(opened.get(x, y)));
        }
    }
    out
}

/// `close(src) − src`, saturating: dark element-scale structures.
pub fn black_hat(src: ImageU8, kernel: &[(i32, i32)]) -> GrayImageU8 {
    let closed = erode(dilate(src.clone(), kernel).as_view(), kernel);
    let mut out = GrayImageU8::zeroed(src.w, src.h);
    for y in 0..src.h {
        for x in 0..src.w {
            out.set(x, y, closed.get(x, y).saturating_sub(src.get(x, y)));
        }
    }
    out
}

/// Element-wise saturating sum of two planes of equal size.
pub fn add_saturating(a: &GrayImageU8, b: &GrayImageU8) -> GrayImageU8 {
    debug_assert_eq!(a.width(), b.width());
    debug_assert_eq!(a.height(), b.height());
    let data = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| x.saturating_add(y))
        .collect();
    GrayImageU8::new(a.width(), a.height(), data)
}

/// Binary threshold: strictly above `thresh` → 255, else 0.
pub fn threshold_binary(src: ImageU8, thresh: u8) -> GrayImageU8 {
    let mut out = GrayImageU8::zeroed(src.w, src.h);
    for y in 0..src.h {
        for x in 0..src.w {
            if src.get(x, y) > thresh {
                out.set(x, y, 255);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elliptical_kernel_5_matches_the_digital_ellipse() {
        let offsets = elliptical_kernel(5);
        assert_eq!(offsets.len(), 17);
        // single pixel on the top and bottom rows, full rows in between
        for dy in [-2i32, 2] {
            let row: Vec<i32> = offsets.iter().filter(|o| o.1 == dy).map(|o| o.0).collect();
            assert_eq!(row, vec![0], "row dy={dy}");
        }
        for dy in -1i32..=1 {
            let count = offsets.iter().filter(|o| o.1 == dy).count();
            assert_eq!(count, 5, "row dy={dy}");
        }
    }

    #[test]
    fn top_hat_isolates_a_small_bright_spot() {
        let kernel = elliptical_kernel(5);
        let mut src = GrayImageU8::new(20, 20, vec![50u8; 400]);
        for y in 9..12 {
            for x in 9..12 {
                src.set(x, y, 200);
            }
        }
        let th = top_hat(src.as_view(), &kernel);
        assert_eq!(th.get(10, 10), 150, "spot must stand out from background");
        assert_eq!(th.get(2, 2), 0, "flat background must cancel");
        let bh = black_hat(src.as_view(), &kernel);
        assert_eq!(bh.get(10, 10), 0, "bright spot is not a black-hat feature");
    }

    #[test]
    fn black_hat_isolates_a_small_dark_pit() {
        let kernel = elliptical_kernel(5);
        let mut src = GrayImageU8::new(20, 20, vec![120u8; 400]);
        for y in 9..12 {
            for x in 9..12 {
                src.set(x, y, 20);
            }
        }
        let bh = black_hat(src.as_view(), &kernel);
        assert_eq!(bh.get(10, 10), 100);
        assert_eq!(bh.get(2, 2), 0);
        let th = top_hat(src.as_view(), &kernel);
        assert_eq!(th.get(10, 10), 0);
    }

    #[test]
    fn wide_structures_cancel_out_of_both_residuals() {
        // a 12×12 block is wider than the 5×5 element everywhere, so
        // opening restores it and the residual stays zero in its interior
        let kernel = elliptical_kernel(5);
        let mut src = GrayImageU8::new(32, 32, vec![50u8; 32 * 32]);
        for y in 10..22 {
            for x in 10..22 {
                src.set(x, y, 200);
            }
        }
        let th = top_hat(src.as_view(), &kernel);
        assert_eq!(th.get(16, 16), 0, "block interior");
        let bh = black_hat(src.as_view(), &kernel);
        assert_eq!(bh.get(16, 16), 0);
    }

    #[test]
    fn add_saturating_caps_at_255() {
        let a = GrayImageU8::new(2, 1, vec![200, 10]);
        let b = GrayImageU8::new(2, 1, vec![100, 20]);
        let sum = add_saturating(&a, &b);
        assert_eq!(sum.as_bytes(), &[255, 30]);
    }

    #[test]
    fn threshold_is_strict() {
        let src = GrayImageU8::new(3, 1, vec![29, 30, 31]);
        let out = threshold_binary(src.as_view(), 30);
        assert_eq!(out.as_bytes(), &[0, 0, 255]);
    }
}
