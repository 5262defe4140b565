//! Raster operations for pattern tiles.
//!
//! Provides grid-unit cropping with Lanczos3 resampling to a fixed density,
//! reference-grid overlays, page composition, and PNG output tagged with
//! physical density.

pub mod compose;
pub mod crop;
pub mod density;
pub mod grid;
pub mod page;
pub mod rotate;

// Re-exports for convenience
pub use crop::{BoundsPolicy, CropBox, Extent, Tile, crop_tile};
pub use density::{read_density, save_rgb, save_rgba};
pub use grid::apply_grid;
pub use page::{compose_page, page_size};
pub use rotate::rotate_ccw;

/// Output density in pixels per unit (inch).
pub const DENSITY: u32 = 300;

/// Page width in units (A4 portrait).
pub const PAGE_WIDTH_UNITS: f64 = 8.27;

/// Page height in units (A4 portrait).
pub const PAGE_HEIGHT_UNITS: f64 = 11.69;

/// Largest pixel count accepted for a crop or a resized tile.
pub const MAX_TILE_PIXELS: u64 = 1 << 28;

/// Whole units covered by a grid asset in portrait orientation.
pub const GRID_SHEET_UNITS: (u32, u32) = (8, 11);

/// Errors that can occur while producing tiles and pages.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid extent {0}: must be a positive number")]
    InvalidExtent(f64),

    #[error("Cut box {0} is empty")]
    EmptyCut(CropBox),

    #[error("Cut of {width}x{height} pixels exceeds the tile size limit")]
    TooLarge { width: u64, height: u64 },

    #[error("Cut box {crop} lies outside the {width}x{height} source image")]
    OutOfBounds {
        crop: CropBox,
        width: u32,
        height: u32,
    },

    #[error("Image does not fit on page: {width}x{height} pixels")]
    DoesNotFit { width: u32, height: u32 },

    #[error("Overlay is {overlay_w}x{overlay_h} but tile is {tile_w}x{tile_h}")]
    SizeMismatch {
        overlay_w: u32,
        overlay_h: u32,
        tile_w: u32,
        tile_h: u32,
    },
}

/// Result type alias for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
