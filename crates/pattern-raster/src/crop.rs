//! Grid-unit cropping.
//!
//! Cut coordinates are 1-based and end-inclusive: a cut `1 2 1 1` covers
//! the first two units across and the first unit down. The crop is resized
//! so every unit becomes [`DENSITY`] pixels regardless of scan resolution.

use std::fmt;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::{DENSITY, MAX_TILE_PIXELS, RasterError, Result};

/// The physical size declared for a source image. Exactly one dimension
/// is known; the other follows from the pixel aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Physical length of the image width.
    Length(f64),
    /// Physical height of the image height.
    Height(f64),
}

impl Extent {
    /// Source pixels per unit for an image of the given pixel size.
    pub fn pixels_per_unit(self, width: u32, height: u32) -> Result<f64> {
        let (pixels, units) = match self {
            Extent::Length(l) => (width, l),
            Extent::Height(h) => (height, h),
        };
        if !(units.is_finite() && units > 0.0) {
            return Err(RasterError::InvalidExtent(units));
        }
        Ok(f64::from(pixels) / units)
    }
}

/// What to do when a cut reaches past the source image edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Fill the missing area with transparent pixels.
    #[default]
    Pad,
    /// Fail the cut.
    Reject,
}

/// Pixel crop box, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropBox {
    /// Box covering grid units `x_start..=x_end`, `y_start..=y_end`.
    pub fn from_units(ppu: f64, x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Self {
        let px = |v: f64| (v * ppu).round_ties_even() as i64;
        Self {
            left: px(x_start - 1.0),
            top: px(y_start - 1.0),
            right: px(x_end),
            bottom: px(y_end),
        }
    }

    pub fn width(&self) -> i64 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i64 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A cropped tile at output density plus the units it spans.
#[derive(Debug, Clone)]
pub struct Tile {
    pub image: RgbaImage,
    pub squares_x: f64,
    pub squares_y: f64,
}

/// Crop grid units out of `source` and resize to [`DENSITY`] per unit.
pub fn crop_tile(
    source: &DynamicImage,
    extent: Extent,
    (x_start, x_end): (f64, f64),
    (y_start, y_end): (f64, f64),
    policy: BoundsPolicy,
) -> Result<Tile> {
    let (src_w, src_h) = (source.width(), source.height());
    let ppu = extent.pixels_per_unit(src_w, src_h)?;
    let crop = CropBox::from_units(ppu, x_start, x_end, y_start, y_end);

    let squares_x = x_end - x_start + 1.0;
    let squares_y = y_end - y_start + 1.0;
    let out_w = (squares_x * f64::from(DENSITY)).max(0.0);
    let out_h = (squares_y * f64::from(DENSITY)).max(0.0);

    if crop.width() <= 0 || crop.height() <= 0 || out_w < 1.0 || out_h < 1.0 {
        return Err(RasterError::EmptyCut(crop));
    }
    check_size(crop.width() as f64, crop.height() as f64)?;
    check_size(out_w, out_h)?;
    let (out_w, out_h) = (out_w as u32, out_h as u32);

    if policy == BoundsPolicy::Reject && !crop.is_within(src_w, src_h) {
        return Err(RasterError::OutOfBounds {
            crop,
            width: src_w,
            height: src_h,
        });
    }

    debug!(
        src_w,
        src_h,
        ppu,
        %crop,
        out_w,
        out_h,
        "Cropping tile"
    );

    let cropped = crop_padded(&source.to_rgba8(), crop);
    let image = imageops::resize(&cropped, out_w, out_h, FilterType::Lanczos3);

    Ok(Tile {
        image,
        squares_x,
        squares_y,
    })
}

/// Reject sizes whose sides overflow `u32` or whose area exceeds
/// [`MAX_TILE_PIXELS`].
fn check_size(width: f64, height: f64) -> Result<()> {
    let fits = width <= f64::from(u32::MAX)
        && height <= f64::from(u32::MAX)
        && width * height <= MAX_TILE_PIXELS as f64;
    if fits {
        Ok(())
    } else {
        Err(RasterError::TooLarge {
            width: width as u64,
            height: height as u64,
        })
    }
}

/// Copy `crop` out of `src`; area outside `src` stays transparent.
pub(crate) fn crop_padded(src: &RgbaImage, crop: CropBox) -> RgbaImage {
    let mut out = RgbaImage::new(crop.width() as u32, crop.height() as u32);
    imageops::replace(&mut out, src, -crop.left, -crop.top);
    out
}
