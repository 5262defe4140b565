use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use crate::config::AppConfig;

/// A scratch tree with `input/dress/front.png`: 400×100 pixels, so a
/// header of `l 4` gives 100 source pixels per unit.
struct Workspace {
    dir: TempDir,
    config: AppConfig,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("input");
        std::fs::create_dir_all(input.join("dress")).unwrap();
        RgbaImage::from_fn(400, 100, |x, _| Rgba([(x / 100 * 60) as u8, 120, 200, 255]))
            .save(input.join("dress/front.png"))
            .unwrap();

        let config = AppConfig {
            cuts_file: dir.path().join("cuts.txt"),
            input_root: input,
            output_root: dir.path().join("output"),
            assets_dir: dir.path().join("assets"),
            ..AppConfig::default()
        };
        Self { dir, config }
    }

    fn with_print(mut self) -> Self {
        self.config.print = true;
        self
    }

    fn with_grid(mut self) -> Self {
        self.config.grid = true;
        self
    }

    fn write_cuts(&self, text: &str) {
        std::fs::write(&self.config.cuts_file, text).unwrap();
    }

    fn front_folder(&self) -> PathBuf {
        self.config.output_root.join("dress/front")
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Sorted file names in `folder`.
fn files_in(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(folder)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

mod grid;
