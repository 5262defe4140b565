//! Print page composition.

use image::{Rgb, RgbImage, RgbaImage};
use tracing::debug;

use crate::compose::paste_opaque;
use crate::rotate::rotate_ccw;
use crate::{DENSITY, PAGE_HEIGHT_UNITS, PAGE_WIDTH_UNITS, RasterError, Result};

/// Page size in pixels at [`DENSITY`].
pub fn page_size() -> (u32, u32) {
    (
        (PAGE_WIDTH_UNITS * f64::from(DENSITY)) as u32,
        (PAGE_HEIGHT_UNITS * f64::from(DENSITY)) as u32,
    )
}

/// Center `img` on a white page, rotating it a quarter turn if that is the
/// only way it fits.
pub fn compose_page(img: &RgbaImage) -> Result<RgbImage> {
    let (page_w, page_h) = page_size();
    let (w, h) = img.dimensions();

    let rotated;
    let placed = if w <= page_w && h <= page_h {
        img
    } else if h <= page_w && w <= page_h {
        debug!(w, h, "Tile only fits rotated");
        rotated = rotate_ccw(img);
        &rotated
    } else {
        return Err(RasterError::DoesNotFit {
            width: w,
            height: h,
        });
    };

    let x = (page_w - placed.width()) / 2;
    let y = (page_h - placed.height()) / 2;
    debug!(x, y, page_w, page_h, "Placing tile on page");

    let mut page = RgbImage::from_pixel(page_w, page_h, Rgb([255, 255, 255]));
    paste_opaque(&mut page, placed, x, y);
    Ok(page)
}
