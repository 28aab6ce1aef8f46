//! Region-of-interest masks.
//!
//! Lane markings appear in the lower portion of a forward-facing camera
//! frame, so the edge map is intersected with a trapezoidal mask spanning
//! the full width at the bottom edge and at mid-height before line
//! extraction. Masks are 0/255 planes reusing [`GrayImageU8`].
use crate::image::{GrayImageU8, ImageU8};

/// Trapezoid covering the lower half of a `w × h` frame, in polygon form.
pub fn lane_roi_polygon(w: usize, h: usize) -> [(i32, i32); 4] {
    let (w, h) = (w as i32, h as i32);
    [(0, h), (0, h / 2), (w, h / 2), (w, h)]
}

/// Rasterize a convex polygon into a 0/255 mask via scanline filling.
///
/// Vertices may lie outside the image; filled spans are clamped.
pub fn polygon_mask(w: usize, h: usize, pts: &[(i32, i32)]) -> GrayImageU8 {
    let mut mask = GrayImageU8::zeroed(w, h);
    if w == 0 || h == 0 || pts.len() < 3 {
        return mask;
    }

    let y_min = pts.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let y_max = pts
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(-1)
        .min(h as i32 - 1);

    for y in y_min..=y_max {
        let mut span_min = f32::INFINITY;
        let mut span_max = f32::NEG_INFINITY;
        for i in 0..pts.len() {
            let (x0, y0) = pts[i];
            let (x1, y1) = pts[(i + 1) % pts.len()];
            if y0 == y1 {
                if y == y0 {
                    span_min = span_min.min(x0.min(x1) as f32);
                    span_max = span_max.max(x0.max(x1) as f32);
                }
                continue;
            }
            if y < y0.min(y1) || y > y0.max(y1) {
                continue;
            }
            let t = (y - y0) as f32 / (y1 - y0) as f32;
            let x = x0 as f32 + t * (x1 - x0) as f32;
            span_min = span_min.min(x);
            span_max = span_max.max(x);
        }
        if span_min > span_max {
            continue;
        }
        let x_start = (span_min.ceil() as i32).max(0);
        let x_end = (span_max.floor() as i32).min(w as i32 - 1);
        for x in x_start..=x_end {
            mask.set(x as usize, y as usize, 255);
        }
    }
    mask
}

/// Zero every pixel of `map` where `mask` is zero (bitwise-and semantics).
pub fn apply_mask(map: &mut GrayImageU8, mask: ImageU8) {
    debug_assert_eq!(map.width(), mask.w);
    debug_assert_eq!(map.height(), mask.h);
    for y in 0..map.height() {
        for x in 0..map.width() {
            if mask.get(x, y) == 0 {
                map.set(x, y, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_roi_covers_lower_half_only() {
        let (w, h) = (64usize, 48usize);
        let mask = polygon_mask(w, h, &lane_roi_polygon(w, h));
        assert_eq!(mask.get(0, h - 1), 255);
        assert_eq!(mask.get(w - 1, h - 1), 255);
        assert_eq!(mask.get(w / 2, h / 2), 255);
        assert_eq!(mask.get(w / 2, h / 2 - 1), 0);
        assert_eq!(mask.get(0, 0), 0);
        assert_eq!(mask.get(w - 1, 0), 0);
    }

    #[test]
    fn triangle_mask_is_filled_between_its_edges() {
        let mask = polygon_mask(20, 20, &[(10, 2), (2, 18), (18, 18)]);
        assert_eq!(mask.get(10, 10), 255, "interior");
        assert_eq!(mask.get(10, 2), 255, "apex");
        assert_eq!(mask.get(2, 2), 0, "outside left of apex");
        assert_eq!(mask.get(19, 19), 0, "outside bottom-right corner");
    }

    #[test]
    fn apply_mask_clears_outside_pixels() {
        let mut map = GrayImageU8::new(4, 4, vec![255u8; 16]);
        let mut mask = GrayImageU8::zeroed(4, 4);
        mask.set(1, 1, 255);
        mask.set(2, 2, 255);
        apply_mask(&mut map, mask.as_view());
        let set: usize = map.as_bytes().iter().filter(|&&v| v != 0).count();
        assert_eq!(set, 2);
        assert_eq!(map.get(1, 1), 255);
        assert_eq!(map.get(2, 2), 255);
    }
}
