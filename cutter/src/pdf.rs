//! PDF pass over the output tree.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::pipeline::print_suffix;

/// Folders under (and including) `root` that have no subfolders, sorted.
///
/// A missing `root` yields no folders.
pub fn leaf_folders(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut leaves = Vec::new();
    if root.is_dir() {
        collect_leaves(root, &mut leaves)?;
    }
    leaves.sort();
    Ok(leaves)
}

fn collect_leaves(dir: &Path, leaves: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }

    if subdirs.is_empty() {
        leaves.push(dir.to_path_buf());
    }
    for sub in subdirs {
        collect_leaves(&sub, leaves)?;
    }
    Ok(())
}

/// Assemble a PDF in every leaf folder of `root` that holds print pages.
pub fn assemble_all(root: &Path, grid: bool) -> Result<Vec<PathBuf>, anyhow::Error> {
    let suffix = format!("{}.png", print_suffix(grid));
    let mut written = Vec::new();
    for folder in leaf_folders(root)? {
        debug!(folder = %folder.display(), "Assembling PDF");
        let pdf = page_pdf::assemble_folder(&folder, &suffix)
            .with_context(|| format!("failed to assemble PDF in {}", folder.display()))?;
        written.extend(pdf);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_folders() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("dress/front")).unwrap();
        std::fs::create_dir_all(root.path().join("dress/back")).unwrap();
        std::fs::create_dir_all(root.path().join("skirt")).unwrap();
        std::fs::write(root.path().join("dress/note.txt"), b"").unwrap();

        let leaves = leaf_folders(root.path()).unwrap();
        assert_eq!(
            leaves,
            vec![
                root.path().join("dress/back"),
                root.path().join("dress/front"),
                root.path().join("skirt"),
            ]
        );
    }

    #[test]
    fn test_empty_root_is_its_own_leaf() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(
            leaf_folders(root.path()).unwrap(),
            vec![root.path().to_path_buf()]
        );
    }

    #[test]
    fn test_missing_root_has_no_leaves() {
        let root = tempfile::tempdir().unwrap();
        assert!(leaf_folders(&root.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_assemble_all_skips_folders_without_pages() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("a")).unwrap();
        assert!(assemble_all(root.path(), false).unwrap().is_empty());
    }
}
