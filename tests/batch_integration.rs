use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use logoprep::api::{
    CropFileOutcome, convert_directory, crop_directory, crop_file_to_content,
    verify_directory_alpha,
};
use logoprep::{AlphaStatus, ConvertOutcome, ProcessingParams, convert_file_to_png, verify_file_alpha};

fn write_bordered_png(path: &Path, width: u32, height: u32, border: u32) {
    let mut img = RgbaImage::new(width, height);
    for y in border..height - border {
        for x in border..width - border {
            img.put_pixel(x, y, Rgba([200, 40, 40, 255]));
        }
    }
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

fn write_rgb_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([10, 20, 30]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

#[test]
fn crop_directory_backs_up_and_shrinks() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    write_bordered_png(&logo, 100, 50, 10);

    let backup_dir = dir.path().join("old");
    let params = ProcessingParams::default();
    let report = crop_directory(dir.path(), &params, Some(&backup_dir)).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);
    assert!(backup_dir.join("logo.png").exists());

    let cropped = image::open(&logo).unwrap();
    assert_eq!((cropped.width(), cropped.height()), (84, 34));

    // Second pass: already tight, nothing re-encoded, backup untouched
    let before = fs::read(backup_dir.join("logo.png")).unwrap();
    let report = crop_directory(dir.path(), &params, Some(&backup_dir)).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.skipped, 1);
    assert_eq!(fs::read(backup_dir.join("logo.png")).unwrap(), before);
}

#[test]
fn crop_skips_blank_images() {
    let dir = TempDir::new().unwrap();
    let blank = dir.path().join("blank.png");
    RgbaImage::new(32, 32)
        .save_with_format(&blank, ImageFormat::Png)
        .unwrap();

    let outcome = crop_file_to_content(&blank, &ProcessingParams::default(), None).unwrap();
    assert_eq!(outcome, CropFileOutcome::NoContent);
    // File left untouched
    let img = image::open(&blank).unwrap();
    assert_eq!((img.width(), img.height()), (32, 32));
}

#[test]
fn corrupt_file_is_counted_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_bordered_png(&dir.path().join("good.png"), 64, 64, 8);
    fs::write(dir.path().join("bad.png"), b"definitely not a png").unwrap();

    let report = crop_directory(dir.path(), &ProcessingParams::default(), None).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
}

#[test]
fn convert_directory_rewrites_and_converts() {
    let dir = TempDir::new().unwrap();
    write_rgb_png(&dir.path().join("flat.png"), 16, 16);
    write_bordered_png(&dir.path().join("ready.png"), 16, 16, 2);
    RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]))
        .save_with_format(dir.path().join("photo.jpg"), ImageFormat::Jpeg)
        .unwrap();
    fs::write(dir.path().join("vector.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let backup_dir = dir.path().join("old");
    let report = convert_directory(dir.path(), Some(&backup_dir)).unwrap();

    // flat.png rewritten, ready.png untouched, photo.jpg converted; the SVG
    // is deferred to the renderer path and the text file never listed.
    assert_eq!(report.processed, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);

    assert!(dir.path().join("photo.png").exists());
    assert!(!dir.path().join("photo.jpg").exists());
    assert!(backup_dir.join("photo.jpg").exists());
    assert!(dir.path().join("vector.svg").exists());

    for name in ["flat.png", "ready.png", "photo.png"] {
        let img = image::open(dir.path().join(name)).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgba8, "{}", name);
    }
}

#[test]
fn convert_file_outcomes() {
    let dir = TempDir::new().unwrap();

    let ready = dir.path().join("ready.png");
    write_bordered_png(&ready, 8, 8, 1);
    assert_eq!(
        convert_file_to_png(&ready, None).unwrap(),
        ConvertOutcome::AlreadyRgba
    );

    let flat = dir.path().join("flat.png");
    write_rgb_png(&flat, 8, 8);
    assert_eq!(
        convert_file_to_png(&flat, None).unwrap(),
        ConvertOutcome::RewrittenRgba
    );

    let vector = dir.path().join("v.svg");
    fs::write(&vector, "<svg/>").unwrap();
    assert_eq!(
        convert_file_to_png(&vector, None).unwrap(),
        ConvertOutcome::SkippedVector
    );
}

#[test]
fn verify_reports_and_fixes_missing_alpha() {
    let dir = TempDir::new().unwrap();
    let flat = dir.path().join("flat.png");
    write_rgb_png(&flat, 8, 8);
    let ready = dir.path().join("ready.png");
    write_bordered_png(&ready, 8, 8, 1);

    assert_eq!(
        verify_file_alpha(&flat, false).unwrap(),
        AlphaStatus::MissingAlpha
    );
    assert_eq!(
        verify_file_alpha(&ready, false).unwrap(),
        AlphaStatus::Rgba { fully_opaque: false }
    );

    let report = verify_directory_alpha(dir.path(), false).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);

    // Fix mode re-encodes the flat file in place
    assert_eq!(verify_file_alpha(&flat, true).unwrap(), AlphaStatus::Converted);
    assert_eq!(
        verify_file_alpha(&flat, false).unwrap(),
        AlphaStatus::Rgba { fully_opaque: true }
    );
}
