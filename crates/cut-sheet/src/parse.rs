//! Header and cut-line parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::grid::GridVariant;
use crate::{COMMENT_PREFIXES, CutSheetError, Result};

static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:'(.*?)'|"(.*?)")\s+([lhLH])\s+([0-9.]+)"#).unwrap()
});

// Same shape with any mode letter, to report a bad mode rather than a bad header.
static RE_HEADER_ANY_MODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:'.*?'|".*?")\s+([A-Za-z])\s+[0-9.]+"#).unwrap());

/// Which physical dimension a header's scalar describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scalar is the sheet's physical length (measured along the width).
    Length,
    /// Scalar is the sheet's physical height.
    Height,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Length => "l",
            Mode::Height => "h",
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = CutSheetError;

    fn try_from(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "l" => Ok(Mode::Length),
            "h" => Ok(Mode::Height),
            _ => Err(CutSheetError::InvalidMode(value.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image header: `'<name>' <l|h> <number>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub image: String,
    pub mode: Mode,
    pub scalar: f64,
}

/// One cut instruction in 1-based, end-inclusive grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cut {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
}

impl Cut {
    /// Number of grid units spanned horizontally.
    pub fn squares_x(&self) -> f64 {
        self.x_end - self.x_start + 1.0
    }

    /// Number of grid units spanned vertically.
    pub fn squares_y(&self) -> f64 {
        self.y_end - self.y_start + 1.0
    }

    /// Grid asset aligned with this cut's start coordinates.
    pub fn grid_variant(&self) -> GridVariant {
        GridVariant::for_start(self.x_start, self.y_start)
    }
}

/// True for lines that clear the active header: blank or comment lines.
pub fn is_reset_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || COMMENT_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Parse a header line. Text after the scalar is ignored.
pub fn parse_header(line: &str) -> Result<Header> {
    let trimmed = line.trim();
    let Some(caps) = RE_HEADER.captures(trimmed) else {
        return Err(match RE_HEADER_ANY_MODE.captures(trimmed) {
            Some(c) => CutSheetError::InvalidMode(c[1].to_string()),
            None => CutSheetError::InvalidHeader(line.to_string()),
        });
    };

    let image = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let mode = Mode::try_from(&caps[3])?;
    let raw = &caps[4];
    let scalar: f64 = raw
        .parse()
        .map_err(|_| CutSheetError::InvalidDimension(raw.to_string()))?;

    Ok(Header {
        image,
        mode,
        scalar,
    })
}

/// Parse a cut line of exactly four whitespace-separated decimals.
pub fn parse_cut_line(line: &str) -> Result<Cut> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(CutSheetError::WrongTokenCount(parts.len()));
    }

    let mut values = [0.0f64; 4];
    for (slot, token) in values.iter_mut().zip(&parts) {
        *slot = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CutSheetError::InvalidCoordinate(token.to_string()))?;
    }

    let [x_start, x_end, y_start, y_end] = values;
    Ok(Cut {
        x_start,
        x_end,
        y_start,
        y_end,
    })
}
