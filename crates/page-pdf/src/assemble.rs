//! Build one PDF from the page images of a folder.
//!
//! Each PNG becomes one PDF page drawn edge to edge. The page size in
//! points follows the PNG's own density, so a 300 dpi A4 render yields an
//! A4 page.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use pattern_raster::read_density;
use tracing::{debug, info};

use crate::{DEFAULT_DPI, PdfError, Result};

const POINTS_PER_INCH: f64 = 72.0;

/// Files in `folder` whose names end with `suffix`, sorted by name.
pub fn collect_pages(folder: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut names: Vec<String> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(suffix))
        .collect();
    names.sort();
    Ok(names.into_iter().map(|name| folder.join(name)).collect())
}

/// Assemble `<folder>/<folder-name>.pdf` from the pages ending in `suffix`.
///
/// Returns `Ok(None)` when the folder has no matching pages.
pub fn assemble_folder(folder: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    let pages = collect_pages(folder, suffix)?;
    if pages.is_empty() {
        debug!(folder = %folder.display(), suffix, "No pages to assemble");
        return Ok(None);
    }

    let name = folder
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PdfError::UnnamedFolder(folder.display().to_string()))?;
    let out = folder.join(format!("{name}.pdf"));
    write_pdf(&pages, &out)?;
    Ok(Some(out))
}

/// Write `pages` in order as a single PDF at `out`.
pub fn write_pdf(pages: &[PathBuf], out: &Path) -> Result<()> {
    if pages.is_empty() {
        return Err(PdfError::NoPages);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (i, path) in pages.iter().enumerate() {
        let img = image::open(path)?.to_rgb8();
        let (w, h) = img.dimensions();
        let dpi = read_density(path).ok().flatten().unwrap_or(DEFAULT_DPI);
        let width_pt = (f64::from(w) * POINTS_PER_INCH / dpi) as f32;
        let height_pt = (f64::from(h) * POINTS_PER_INCH / dpi) as f32;
        debug!(path = %path.display(), w, h, dpi, width_pt, height_pt, "Adding page");

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(w),
                "Height" => i64::from(h),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            img.into_raw(),
        ));

        let image_name = format!("Im{}", i + 1);
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width_pt.into(),
                        0.into(),
                        0.into(),
                        height_pt.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(image_name.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let media_box: Vec<Object> = vec![0.into(), 0.into(), width_pt.into(), height_pt.into()];

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    image_name.as_str() => image_id,
                },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.compress();
    doc.save(out)?;
    info!(path = %out.display(), pages = count, "Wrote PDF");
    Ok(())
}
