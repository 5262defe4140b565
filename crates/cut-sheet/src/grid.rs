//! Grid asset selection.
//!
//! A reference grid is drawn on whole units. When a cut starts half way
//! into a unit, a shifted variant of the grid keeps the lines aligned with
//! the pattern.

use serde::Serialize;

/// One of the four pre-rendered grid assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridVariant {
    Plain,
    X,
    Y,
    XY,
}

impl GridVariant {
    /// Pick the variant from the fractional parts of the start coordinates.
    pub fn for_start(x_start: f64, y_start: f64) -> Self {
        match (x_start.fract() != 0.0, y_start.fract() != 0.0) {
            (false, false) => GridVariant::Plain,
            (true, false) => GridVariant::X,
            (false, true) => GridVariant::Y,
            (true, true) => GridVariant::XY,
        }
    }

    /// Asset file name inside the assets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            GridVariant::Plain => "grid.png",
            GridVariant::X => "gridx.png",
            GridVariant::Y => "gridy.png",
            GridVariant::XY => "gridxy.png",
        }
    }
}
