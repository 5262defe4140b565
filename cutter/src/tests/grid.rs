use image::{Rgba, RgbaImage};

use super::{Workspace, files_in};
use crate::driver;

/// Grid asset with a single opaque black row along the top.
fn write_grid_asset(ws: &Workspace, name: &str) {
    std::fs::create_dir_all(&ws.config.assets_dir).unwrap();
    let mut img = RgbaImage::new(80, 110);
    for x in 0..80 {
        img.put_pixel(x, 0, Rgba([0, 0, 0, 255]));
    }
    img.save(ws.config.assets_dir.join(name)).unwrap();
}

#[test]
fn test_grid_and_print_outputs() {
    let ws = Workspace::new().with_grid().with_print();
    write_grid_asset(&ws, "grid.png");
    ws.write_cuts("'dress/front.png' l 4\n1 1 1 1\n");

    driver::run(&ws.config).unwrap();
    assert_eq!(
        files_in(&ws.front_folder()),
        ["1.png", "1_grid.png", "1_grid_print.png"]
    );

    let tile = image::open(ws.front_folder().join("1.png")).unwrap().to_rgba8();
    let grid = image::open(ws.front_folder().join("1_grid.png")).unwrap().to_rgba8();
    assert_eq!(tile.dimensions(), grid.dimensions());
    assert!(grid.get_pixel(150, 0)[1] < tile.get_pixel(150, 0)[1]);
}

#[test]
fn test_fractional_start_uses_shifted_variant() {
    let ws = Workspace::new().with_grid();
    // Only gridx.png exists; a plain-aligned cut would find no asset.
    write_grid_asset(&ws, "gridx.png");
    ws.write_cuts("'dress/front.png' l 4\n1.5 2 1 1\n1 1 1 1\n");

    driver::run(&ws.config).unwrap();
    let shifted = image::open(ws.front_folder().join("1_grid.png")).unwrap().to_rgba8();
    let shifted_tile = image::open(ws.front_folder().join("1.png")).unwrap().to_rgba8();
    assert_ne!(shifted, shifted_tile);

    let plain = image::open(ws.front_folder().join("2_grid.png")).unwrap().to_rgba8();
    let plain_tile = image::open(ws.front_folder().join("2.png")).unwrap().to_rgba8();
    assert_eq!(plain, plain_tile);
}

#[test]
fn test_missing_grid_asset_still_writes_grid_file() {
    let ws = Workspace::new().with_grid();
    ws.write_cuts("'dress/front.png' l 4\n1 1 1 1\n");

    driver::run(&ws.config).unwrap();
    assert_eq!(files_in(&ws.front_folder()), ["1.png", "1_grid.png"]);
}

#[test]
fn test_grid_pdf_uses_grid_print_pages() {
    let mut ws = Workspace::new().with_grid().with_print();
    ws.config.pdf = true;
    ws.write_cuts("'dress/front.png' l 4\n1 1 1 1\n");

    let report = driver::run(&ws.config).unwrap();
    assert_eq!(report.pdfs, vec![ws.front_folder().join("front.pdf")]);
}
