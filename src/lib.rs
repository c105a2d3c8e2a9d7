#![doc = r#"
logoprep — a batch preparation toolkit for logo image assets.

This crate turns a messy "logos" directory into a uniform set of RGBA PNGs:
it converts raster sources (webp, jpeg, gif, bmp, ico, alpha-less png) to
PNG with an alpha channel, renders SVG sources through an external OS
thumbnailer, crops images to their visible content bounding box, and
verifies that every output carries real transparency. It powers the
logoprep CLI and can be embedded in your own Rust applications.

The algorithmic core is two pure functions over in-memory RGBA buffers:
content bounding-box detection and aspect-preserving fit. Everything else is
directory iteration, format dispatch, and copy-before-mutate backup
bookkeeping.

Quick start: crop a directory of PNGs
-------------------------------------
```rust,no_run
use std::path::Path;
use logoprep::{crop_directory, ProcessingParams};

fn main() -> logoprep::Result<()> {
    let params = ProcessingParams::default(); // threshold 5, padding 1%
    let report = crop_directory(Path::new("logos"), &params, Some(Path::new("logos/old")))?;
    println!(
        "cropped={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Core algorithms on in-memory buffers
------------------------------------
```rust
use image::RgbaImage;
use logoprep::core::processing::bbox::find_content_bbox;
use logoprep::core::processing::fit::fit_to_dimensions;

fn shrink(logo: &RgbaImage) -> logoprep::Result<RgbaImage> {
    // None means the image is entirely background; callers skip cropping.
    let _bbox = find_content_bbox(logo, 5, 0.01);

    // Output is exactly 512x256 regardless of the source aspect ratio;
    // mismatched ratios are padded with transparency, never cropped.
    fit_to_dimensions(logo, 512, 256)
}
```

Render an SVG source
--------------------
```rust,no_run
use std::path::Path;
use logoprep::{render_svg_to_png, Thumbnailer};

fn main() -> logoprep::Result<()> {
    let (w, h) = render_svg_to_png(
        Path::new("logos/old/copilot.svg"),
        Path::new("logos/copilot.png"),
        None, // use the SVG's natural dimensions
        &Thumbnailer::default(),
    )?;
    println!("rendered {}x{}", w, h);
    Ok(())
}
```

Error handling
--------------
All public functions return `logoprep::Result<T>`; match on
`logoprep::Error` to handle specific cases. Blank images and already-tight
images are not errors: they surface as `CropOutcome::NoContent` and
`CropOutcome::AlreadyTight` so batch callers can skip re-encoding.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — bounding-box, fit, crop, and RGBA-coercion primitives.
- [`io`] — SVG parsing, thumbnailer, and backup collaborators.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ProcessingParams;
pub use core::processing::bbox::BoundingBox;
pub use error::{Error, Result};
pub use types::{AlphaStatus, ConvertOutcome, CropOutcome, SourceFormat};

// Collaborators
pub use io::svg::SvgDimensions;
pub use io::thumbnailer::Thumbnailer;

// High-level API re-exports
pub use api::{
    BatchReport, CropFileOutcome, convert_directory, convert_file_to_png, crop_directory,
    crop_file_to_content, render_svg_to_png, verify_directory_alpha, verify_file_alpha,
};
