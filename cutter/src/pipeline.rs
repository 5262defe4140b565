//! Per-cut processing: crop, optional grid overlay, optional print page.

use std::path::{Path, PathBuf};

use cut_sheet::{Cut, CutSheetError, Header, Mode};
use pattern_raster::{
    DENSITY, Extent, RasterError, apply_grid, compose_page, crop_tile, save_rgb, save_rgba,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::output::{FolderSequence, output_folder};

/// Suffix of print-page files (before `.png`).
pub fn print_suffix(grid: bool) -> &'static str {
    if grid { "_grid_print" } else { "_print" }
}

/// Files written for one cut.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CutOutputs {
    pub tile: Option<PathBuf>,
    pub grid: Option<PathBuf>,
    pub print: Option<PathBuf>,
}

impl CutOutputs {
    pub fn written(&self) -> Vec<PathBuf> {
        [&self.tile, &self.grid, &self.print]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

/// Why a cut produced no (or partial) output.
#[derive(Debug, thiserror::Error)]
pub enum CutError {
    #[error("{0}")]
    Sheet(#[from] CutSheetError),

    #[error("{0}")]
    Raster(#[from] RasterError),

    #[error("Failed to open source image {path}: {source}")]
    Source {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed cut plus whatever it wrote before failing.
#[derive(Debug)]
pub struct CutFailure {
    pub error: CutError,
    pub partial: CutOutputs,
}

/// Runs cuts for one batch, owning the folder numbering.
pub struct CutPipeline<'a> {
    config: &'a AppConfig,
    sequence: FolderSequence,
}

impl<'a> CutPipeline<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            sequence: FolderSequence::new(),
        }
    }

    /// Process one cut against `header`'s image.
    pub fn run(&mut self, header: &Header, cut: &Cut) -> Result<CutOutputs, CutFailure> {
        let mut outputs = CutOutputs::default();
        match self.run_into(header, cut, &mut outputs) {
            Ok(()) => Ok(outputs),
            Err(error) => Err(CutFailure {
                error,
                partial: outputs,
            }),
        }
    }

    fn run_into(
        &mut self,
        header: &Header,
        cut: &Cut,
        outputs: &mut CutOutputs,
    ) -> Result<(), CutError> {
        let image_path = self.config.input_root.join(&header.image);
        let source = image::open(&image_path).map_err(|source| CutError::Source {
            path: image_path.clone(),
            source,
        })?;

        let extent = match header.mode {
            Mode::Length => Extent::Length(header.scalar),
            Mode::Height => Extent::Height(header.scalar),
        };
        let tile = crop_tile(
            &source,
            extent,
            (cut.x_start, cut.x_end),
            (cut.y_start, cut.y_end),
            self.config.bounds,
        )?;

        let folder = output_folder(
            &image_path,
            &self.config.input_root,
            &self.config.output_root,
        );
        std::fs::create_dir_all(&folder)?;
        let number = self.sequence.next(&folder)?;

        let tile_path = folder.join(format!("{number}.png"));
        save_rgba(&tile.image, &tile_path, DENSITY)?;
        info!(path = %tile_path.display(), squares_x = tile.squares_x, squares_y = tile.squares_y, "Wrote tile");
        outputs.tile = Some(tile_path);

        let finished = if self.config.grid {
            let grid_path = self.config.assets_dir.join(cut.grid_variant().file_name());
            let with_grid = apply_grid(&tile.image, &grid_path, tile.squares_x, tile.squares_y)?;
            let path = numbered(&folder, number, "_grid");
            save_rgba(&with_grid, &path, DENSITY)?;
            debug!(path = %path.display(), grid = %grid_path.display(), "Wrote grid tile");
            outputs.grid = Some(path);
            with_grid
        } else {
            tile.image
        };

        if self.config.print {
            let page = compose_page(&finished)?;
            let path = numbered(&folder, number, print_suffix(self.config.grid));
            save_rgb(&page, &path, DENSITY)?;
            debug!(path = %path.display(), "Wrote print page");
            outputs.print = Some(path);
        }

        Ok(())
    }
}

fn numbered(folder: &Path, number: u32, suffix: &str) -> PathBuf {
    folder.join(format!("{number}{suffix}.png"))
}
