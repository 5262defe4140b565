//! Quarter-turn rotation used when a tile or grid only fits sideways.

use image::{RgbaImage, imageops};
use tracing::debug;

/// Rotate an image 90 degrees counter-clockwise.
///
/// Width and height swap; the top-right corner becomes the top-left.
pub fn rotate_ccw(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    debug!(w, h, "Rotating image 90 degrees counter-clockwise");
    imageops::rotate270(img)
}
