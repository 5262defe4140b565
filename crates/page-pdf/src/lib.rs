//! Multi-page PDF assembly from print-page PNGs.

pub mod assemble;

pub use assemble::{assemble_folder, collect_pages, write_pdf};

/// Density assumed for pages that do not declare one.
pub const DEFAULT_DPI: f64 = 72.0;

/// Errors that can occur while assembling a document.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("No pages to assemble")]
    NoPages,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Folder has no usable name: {0}")]
    UnnamedFolder(String),
}

/// Result type alias for PDF assembly.
pub type Result<T> = std::result::Result<T, PdfError>;
