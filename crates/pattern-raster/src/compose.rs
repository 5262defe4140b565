//! Image composition: alpha-compositing overlays and pasting onto pages.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{RasterError, Result};

/// Composite `top` over `base` (Porter-Duff "over").
///
/// Both images must have the same dimensions.
pub fn alpha_composite(base: &RgbaImage, top: &RgbaImage) -> Result<RgbaImage> {
    if base.dimensions() != top.dimensions() {
        return Err(RasterError::SizeMismatch {
            overlay_w: top.width(),
            overlay_h: top.height(),
            tile_w: base.width(),
            tile_h: base.height(),
        });
    }

    let mut out = base.clone();
    for (dst, src) in out.pixels_mut().zip(top.pixels()) {
        *dst = blend_over(dst, src);
    }
    Ok(out)
}

/// Paste `img` onto `canvas` at `(x, y)`, discarding alpha.
///
/// Pixels falling outside the canvas are dropped.
pub fn paste_opaque(canvas: &mut RgbImage, img: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in img.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < canvas.width() && target_y < canvas.height() {
            canvas.put_pixel(target_x, target_y, Rgb([pixel[0], pixel[1], pixel[2]]));
        }
    }
}

fn blend_over(bg: &Rgba<u8>, fg: &Rgba<u8>) -> Rgba<u8> {
    let fa = f32::from(fg[3]) / 255.0;
    if fa > 0.999 {
        return *fg;
    }
    let ba = f32::from(bg[3]) / 255.0;
    let out_a = fa + ba * (1.0 - fa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let c = (f32::from(fg[i]) * fa + f32::from(bg[i]) * ba * (1.0 - fa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
