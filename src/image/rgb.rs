//! Interleaved 3-channel RGB views and buffers plus the grayscale
//! conversion feeding the detection pipeline.

use super::u8::GrayImageU8;

// BT.601 luma weights in Q14 fixed point.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Borrowed interleaved RGB view (`stride` counts bytes between rows).
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Convert to a single-channel intensity plane (BT.601 luma).
    pub fn to_gray(&self) -> GrayImageU8 {
        let mut out = Vec::with_capacity(self.w * self.h);
        for y in 0..self.h {
            let row = &self.data[y * self.stride..y * self.stride + self.w * 3];
            for px in row.chunks_exact(3) {
                let luma = (u32::from(px[0]) * LUMA_R
                    + u32::from(px[1]) * LUMA_G
                    + u32::from(px[2]) * LUMA_B
                    + (1 << (LUMA_SHIFT - 1)))
                    >> LUMA_SHIFT;
                out.push(luma as u8);
            }
        }
        GrayImageU8::new(self.w, self.h, out)
    }
}

/// Owned interleaved RGB buffer, the frame type handed to the processors.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct from raw interleaved bytes (`data.len() == w * h * 3`).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Borrow as a read-only `ImageRgb8` view.
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width * 3,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_conversion_weights_green_heaviest() {
        let mut img = RgbImageU8::new(3, 1, vec![0u8; 9]);
        img.set_pixel(0, 0, [255, 0, 0]);
        img.set_pixel(1, 0, [0, 255, 0]);
        img.set_pixel(2, 0, [0, 0, 255]);
        let gray = img.as_view().to_gray();
        let (r, g, b) = (gray.get(0, 0), gray.get(1, 0), gray.get(2, 0));
        assert!(g > r && r > b, "expected G > R > B luma, got {r} {g} {b}");
    }

    #[test]
    fn gray_conversion_preserves_neutral_values() {
        let mut img = RgbImageU8::new(2, 2, vec![0u8; 12]);
        for (x, y, v) in [(0, 0, 0u8), (1, 0, 128), (0, 1, 200), (1, 1, 255)] {
            img.set_pixel(x, y, [v, v, v]);
        }
        let gray = img.as_view().to_gray();
        for (x, y, v) in [(0, 0, 0u8), (1, 0, 128), (0, 1, 200), (1, 1, 255)] {
            assert_eq!(gray.get(x, y), v);
        }
    }
}
