use road_detector::image::RgbImageU8;

/// Black road-scene canvas of the given size.
pub fn black_frame(width: usize, height: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImageU8::new(width, height, vec![0u8; width * height * 3])
}

/// Stamp a thick bright stroke between two points, like a painted marking.
pub fn draw_stroke(
    img: &mut RgbImageU8,
    from: (i32, i32),
    to: (i32, i32),
    radius: i32,
    value: u8,
) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1) * 2;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let cx = from.0 as f32 + t * (to.0 - from.0) as f32;
        let cy = from.1 as f32 + t * (to.1 - from.1) as f32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let x = cx.round() as i32 + dx;
                let y = cy.round() as i32 + dy;
                if x >= 0 && y >= 0 && (x as usize) < img.width() && (y as usize) < img.height() {
                    img.set_pixel(x as usize, y as usize, [value, value, value]);
                }
            }
        }
    }
}

/// Fill an ellipse with fine-grained speckle (2×2 blocks alternating
/// bright and dark), mimicking the texture of broken surface material.
pub fn fill_damage_ellipse(
    img: &mut RgbImageU8,
    center: (i32, i32),
    semi_axes: (i32, i32),
) {
    let (cx, cy) = center;
    let (a, b) = semi_axes;
    for y in cy - b..=cy + b {
        for x in cx - a..=cx + a {
            if x < 0 || y < 0 || x as usize >= img.width() || y as usize >= img.height() {
                continue;
            }
            let nx = (x - cx) as f32 / a as f32;
            let ny = (y - cy) as f32 / b as f32;
            if nx * nx + ny * ny <= 1.0 {
                let v = if ((x / 2) + (y / 2)) % 2 == 0 { 160 } else { 40 };
                img.set_pixel(x as usize, y as usize, [v, v, v]);
            }
        }
    }
}
