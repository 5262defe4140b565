//! PNG output carrying a physical density (`pHYs` chunk).
//!
//! The `image` crate's PNG encoder does not write `pHYs`, so files are
//! encoded directly with the `png` crate.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::{RgbImage, RgbaImage};
use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};
use tracing::debug;

use crate::Result;

const METERS_PER_INCH: f64 = 0.0254;

/// Pixels per metre for a dots-per-inch value.
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Save an RGBA image as PNG tagged with `dpi`.
pub fn save_rgba(img: &RgbaImage, path: &Path, dpi: u32) -> Result<()> {
    write_png(path, img.width(), img.height(), ColorType::Rgba, img.as_raw(), dpi)
}

/// Save an RGB image as PNG tagged with `dpi`.
pub fn save_rgb(img: &RgbImage, path: &Path, dpi: u32) -> Result<()> {
    write_png(path, img.width(), img.height(), ColorType::Rgb, img.as_raw(), dpi)
}

fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: ColorType,
    data: &[u8],
    dpi: u32,
) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let mut enc = Encoder::new(writer, width, height);
    enc.set_color(color);
    enc.set_depth(BitDepth::Eight);
    let ppm = pixels_per_meter(dpi);
    enc.set_pixel_dims(Some(PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: Unit::Meter,
    }));

    let mut writer = enc.write_header()?;
    writer.write_image_data(data)?;
    writer.finish()?;

    debug!(path = %path.display(), width, height, dpi, "Saved PNG");
    Ok(())
}

/// Horizontal density of a PNG in dots per inch, if it declares one.
pub fn read_density(path: &Path) -> Result<Option<f64>> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let reader = decoder.read_info()?;
    let dpi = reader
        .info()
        .pixel_dims
        .filter(|d| d.unit == Unit::Meter && d.xppu > 0)
        .map(|d| (f64::from(d.xppu) * METERS_PER_INCH * 100.0).round() / 100.0);
    Ok(dpi)
}
