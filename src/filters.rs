//! Separable smoothing filters.
//!
//! The lane path smooths with a 5×5 Gaussian before edge detection to
//! suppress high-frequency noise. The kernel is the binomial 5-tap
//! approximation [1,4,6,4,1]/16 applied separably, the sigma a 5-tap
//! kernel implies. Borders replicate the edge pixel.
use crate::image::{GrayImageU8, ImageU8};

/// 5×5 Gaussian blur over an 8-bit intensity plane.
pub fn gaussian_blur_5x5(src: ImageU8) -> GrayImageU8 {
    let w = src.w;
    let h = src.h;
    let mut out = GrayImageU8::zeroed(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // horizontal pass into a u16 scratch plane, vertical pass out of it
    let mut tmp = vec![0u16; w * h];
    for y in 0..h {
        for x in 0..w {
            let xm1 = x.saturating_sub(1);
            let xm2 = x.saturating_sub(2);
            let xp1 = (x + 1).min(w - 1);
            let xp2 = (x + 2).min(w - 1);
            let v = u16::from(src.get(xm2, y))
                + 4 * u16::from(src.get(xm1, y))
                + 6 * u16::from(src.get(x, y))
                + 4 * u16::from(src.get(xp1, y))
                + u16::from(src.get(xp2, y));
            tmp[y * w + x] = v;
        }
    }
    for y in 0..h {
        let ym1 = y.saturating_sub(1);
        let ym2 = y.saturating_sub(2);
        let yp1 = (y + 1).min(h - 1);
        let yp2 = (y + 2).min(h - 1);
        for x in 0..w {
            let v = u32::from(tmp[ym2 * w + x])
                + 4 * u32::from(tmp[ym1 * w + x])
                + 6 * u32::from(tmp[y * w + x])
                + 4 * u32::from(tmp[yp1 * w + x])
                + u32::from(tmp[yp2 * w + x]);
            out.set(x, y, ((v + 128) >> 8) as u8);
        }
    }
    out
}
