//! Reference grid overlay.
//!
//! A grid asset is a transparent image of an 8×11 unit sheet of grid
//! lines. It is scaled to output density, trimmed to the tile, and
//! composited on top so printed pieces can be checked against a ruler.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::compose::alpha_composite;
use crate::crop::{CropBox, crop_padded};
use crate::rotate::rotate_ccw;
use crate::{DENSITY, GRID_SHEET_UNITS, RasterError, Result};

/// Overlay the grid asset at `grid_path` onto `tile`.
///
/// A missing asset is not an error: the tile is returned unchanged.
pub fn apply_grid(
    tile: &RgbaImage,
    grid_path: &Path,
    squares_x: f64,
    squares_y: f64,
) -> Result<RgbaImage> {
    if !grid_path.exists() {
        debug!(path = %grid_path.display(), "Grid asset not found, skipping overlay");
        return Ok(tile.clone());
    }

    let asset = image::open(grid_path)?.to_rgba8();
    let grid = fit_grid(&asset, squares_x, squares_y, tile.width(), tile.height())?;
    alpha_composite(tile, &grid)
}

/// Scale and trim a grid asset to a `tile_w`×`tile_h` tile spanning
/// `squares_x`×`squares_y` units.
pub fn fit_grid(
    asset: &RgbaImage,
    squares_x: f64,
    squares_y: f64,
    tile_w: u32,
    tile_h: u32,
) -> Result<RgbaImage> {
    let (mut max_w, mut max_h) = GRID_SHEET_UNITS;
    let mut grid = asset.clone();

    if squares_x > f64::from(max_w) {
        grid = rotate_ccw(&grid);
        std::mem::swap(&mut max_w, &mut max_h);
    }
    if squares_y > f64::from(max_h) {
        return Err(RasterError::DoesNotFit {
            width: tile_w,
            height: tile_h,
        });
    }

    debug!(max_w, max_h, tile_w, tile_h, "Fitting grid to tile");
    let grid = imageops::resize(&grid, max_w * DENSITY, max_h * DENSITY, FilterType::Lanczos3);
    Ok(crop_padded(
        &grid,
        CropBox {
            left: 0,
            top: 0,
            right: i64::from(tile_w),
            bottom: i64::from(tile_h),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn grid_asset() -> RgbaImage {
        // One opaque black line along the top edge, transparent elsewhere.
        let mut img = RgbaImage::new(80, 110);
        for x in 0..80 {
            img.put_pixel(x, 0, Rgba([0, 0, 0, 255]));
        }
        img
    }

    #[test]
    fn test_fit_grid_matches_tile_size() {
        let grid = fit_grid(&grid_asset(), 2.0, 3.0, 600, 900).unwrap();
        assert_eq!(grid.dimensions(), (600, 900));
    }

    #[test]
    fn test_fit_grid_rotates_for_wide_tiles() {
        // 10 units wide only fits the 11-unit side of the sheet.
        let grid = fit_grid(&grid_asset(), 10.0, 2.0, 3000, 600).unwrap();
        assert_eq!(grid.dimensions(), (3000, 600));
        // The top-edge line now runs down the left edge.
        assert!(grid.get_pixel(0, 300)[3] > 0);
        assert_eq!(grid.get_pixel(1500, 300)[3], 0);
    }

    #[test]
    fn test_fit_grid_rejects_tall_tiles() {
        assert!(matches!(
            fit_grid(&grid_asset(), 2.0, 12.0, 600, 3600),
            Err(RasterError::DoesNotFit { .. })
        ));
    }

    #[test]
    fn test_fit_grid_rejects_wide_and_tall() {
        // Rotated bounds are 11×8, so 9 units tall no longer fits.
        assert!(matches!(
            fit_grid(&grid_asset(), 9.0, 9.0, 2700, 2700),
            Err(RasterError::DoesNotFit { .. })
        ));
    }

    #[test]
    fn test_apply_grid_missing_asset_returns_tile() {
        let tile = RgbaImage::from_pixel(300, 300, Rgba([9, 9, 9, 255]));
        let out = apply_grid(&tile, Path::new("/nonexistent/grid.png"), 1.0, 1.0).unwrap();
        assert_eq!(out, tile);
    }

    #[test]
    fn test_apply_grid_composites_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        grid_asset().save(&path).unwrap();

        let tile = RgbaImage::from_pixel(300, 300, Rgba([255, 255, 255, 255]));
        let out = apply_grid(&tile, &path, 1.0, 1.0).unwrap();
        assert_eq!(out.dimensions(), (300, 300));
        assert!(out.get_pixel(150, 0)[0] < 128);
        assert_eq!(*out.get_pixel(150, 150), Rgba([255, 255, 255, 255]));
    }
}
