//! Output tree layout and per-folder file numbering.
//!
//! `input/dress/front.png` cuts land in `output/dress/front/` as
//! `1.png`, `2.png`, ... with `_grid` and `_print` variants beside them.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Output folder for cuts of `image_path`: its path relative to
/// `input_root`, extension stripped, under `output_root`.
pub fn output_folder(image_path: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let image_path = normalize(image_path);
    let input_root = normalize(input_root);
    let relative = image_path
        .strip_prefix(&input_root)
        .unwrap_or(&image_path)
        .with_extension("");
    output_root.join(relative)
}

/// Lexically normalise a path, keeping only named components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

/// Next free number in `folder`: one past the largest `N.png`, or 1.
pub fn scan_next_number(folder: &Path) -> io::Result<u32> {
    successor(folder, scan_max_number(folder)?)
}

/// Largest `N` among the `N.png` files in `folder`, 0 when there are none.
fn scan_max_number(folder: &Path) -> io::Result<u32> {
    let mut max = 0u32;
    for entry in std::fs::read_dir(folder)? {
        let name = entry?.file_name();
        let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(".png")) else {
            continue;
        };
        if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(n) = stem.parse::<u32>() {
            max = max.max(n);
        }
    }
    Ok(max)
}

fn successor(folder: &Path, n: u32) -> io::Result<u32> {
    n.checked_add(1).ok_or_else(|| {
        io::Error::other(format!(
            "numbering exhausted in {}: {n}.png already exists",
            folder.display()
        ))
    })
}

/// Per-folder counters. A folder is scanned once, on first use; later
/// numbers come from memory.
#[derive(Debug, Default)]
pub struct FolderSequence {
    /// Last number claimed (or found on disk) per folder.
    last: HashMap<PathBuf, u32>,
}

impl FolderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next number for `folder`.
    pub fn next(&mut self, folder: &Path) -> io::Result<u32> {
        let last = match self.last.get(folder) {
            Some(&n) => n,
            None => {
                let n = scan_max_number(folder)?;
                debug!(folder = %folder.display(), max = n, "Seeded folder sequence");
                n
            }
        };
        let current = successor(folder, last)?;
        self.last.insert(folder.to_path_buf(), current);
        Ok(current)
    }
}
