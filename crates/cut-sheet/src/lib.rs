//! Cut-sheet text format.
//!
//! A cut sheet is a line-oriented file of image headers
//! (`'sheet.png' l 36`) each followed by cut instructions
//! (`x_start x_end y_start y_end`). Blank and comment lines reset the
//! active header.

pub mod grid;
pub mod parse;
pub mod state;

// Re-exports for convenience
pub use grid::GridVariant;
pub use parse::{Cut, Header, Mode, is_reset_line, parse_cut_line, parse_header};
pub use state::{LineEvent, SheetState};

/// Line prefixes that mark a comment (and reset the active header).
pub const COMMENT_PREFIXES: [&str; 4] = ["#", "//", ";", "--"];

/// Errors produced while reading a cut sheet line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CutSheetError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid mode '{0}', expected 'l' or 'h'")]
    InvalidMode(String),

    #[error("invalid dimension '{0}'")]
    InvalidDimension(String),

    #[error("expected 4 coordinates, got {0}")]
    WrongTokenCount(usize),

    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

/// Result type alias for cut sheet parsing.
pub type Result<T> = std::result::Result<T, CutSheetError>;
