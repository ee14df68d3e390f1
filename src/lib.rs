#![doc = r#"
photosquare — square, uniformly stylized derivatives from a folder of photographs.

Every image goes through the same fixed pipeline:

1. center-crop to the largest square,
2. Lanczos3 resample to the target side (1080 by default),
3. flat color overlay (black at 50% by default),
4. radial vignette from a separable Gaussian mask (intensity -50 by default),

and is re-encoded as an 8-bit RGB JPEG (quality 90 by default). The crate powers
the `photosquare` CLI and can be embedded in your own Rust applications.

Quick start: process one photograph
-----------------------------------
```rust,no_run
use std::path::Path;
use photosquare::{process_image_to_path, ProcessingParams};

fn main() -> photosquare::Result<()> {
    process_image_to_path(
        Path::new("/photos/beach.jpg"),
        Path::new("/out/beach.jpg"),
        &ProcessingParams::default(),
    )
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use photosquare::{
    process_directory_to_path, CropStrategy, OverlaySpec, ProcessingParams, VignetteNormalization,
};

fn main() -> photosquare::Result<()> {
    let params = ProcessingParams {
        crop: CropStrategy::Center,
        size: 1080,
        overlay: OverlaySpec::new([0, 0, 0], 0.5)?,
        vignette_intensity: -50,
        vignette_normalization: VignetteNormalization::Frobenius,
        quality: 90,
    };

    let report = process_directory_to_path(Path::new("/photos"), Path::new("/out"), &params)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Per-image failures (unreadable input, encode/write errors) never abort a batch; they are
captured as [`ProcessingOutcome::Failure`] entries in the [`BatchReport`].

Working on pixels directly
--------------------------
```rust
use photosquare::{process_pixels, PixelBuffer, ProcessingParams};

fn stylize() -> photosquare::Result<PixelBuffer> {
    let frame = PixelBuffer::filled(320, 180, &[200, 180, 160])?;
    let params = ProcessingParams { size: 64, ..Default::default() };
    process_pixels(frame, &params)
}
```

Useful modules
--------------
- [`api`] — high-level entry points, outcomes and batch reports.
- [`core`] — pixel buffer, the crop/resize/overlay/vignette stages and the pipeline.
- [`io`] — image decoding and the JPEG / JSON report writers.
- [`types`] — shared enums (`CropStrategy`, `VignetteNormalization`, `OverlaySpec`).
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
pub use crate::core::buffer::{Channels, PixelBuffer};
pub use crate::core::params::ProcessingParams;
pub use error::{Error, FailureKind, Result};
pub use types::{CropStrategy, OverlaySpec, VignetteNormalization};

// Stages
pub use crate::core::processing::crop::{CropRect, center_square_rect, crop_to_square};
pub use crate::core::processing::overlay::apply_color_overlay;
pub use crate::core::processing::pipeline::process_pixels;
pub use crate::core::processing::resize::resize_to_square;
pub use crate::core::processing::vignette::{apply_vignette, gaussian_kernel, vignette_mask};

// I/O helpers
pub use io::reader::load_image;
pub use io::writers::jpeg::{encode_rgb_jpeg, write_rgb_jpeg};
pub use io::writers::report::{read_batch_report, write_batch_report};

// High-level API re-exports
pub use api::{
    BatchReport, ProcessingOutcome, is_accepted_extension, iterate_jpeg_files,
    process_directory_to_path, process_directory_with, process_image_to_buffer,
    process_image_to_dir, process_image_to_path,
};
