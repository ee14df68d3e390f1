use clap::Parser;
use std::path::PathBuf;

use photosquare::{CropStrategy, VignetteNormalization};

#[derive(Parser, Debug)]
#[command(name = "photosquare", version, about = "Square, stylized JPEG derivatives from a folder of photographs")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing .jpg/.jpeg files (batch mode, non-recursive)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output file, or an existing directory to keep the input's file name (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing; created if missing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with processing parameters; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Crop strategy applied before resizing [default: center]
    #[arg(long, value_enum)]
    pub crop: Option<CropStrategy>,

    /// Side of the square output in pixels [default: 1080]
    #[arg(long)]
    pub size: Option<usize>,

    /// Overlay color as "r,g,b" or "#rrggbb" [default: 0,0,0]
    #[arg(long)]
    pub overlay_color: Option<String>,

    /// Overlay opacity between 0.0 and 1.0 [default: 0.5]
    #[arg(long)]
    pub overlay_opacity: Option<f32>,

    /// Vignette intensity from -100 to 100 [default: -50]
    #[arg(long, allow_hyphen_values = true)]
    pub vignette: Option<i32>,

    /// Vignette mask normalization [default: frobenius]
    #[arg(long, value_enum)]
    pub vignette_normalization: Option<VignetteNormalization>,

    /// JPEG quality from 1 to 100 [default: 90]
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Write a JSON batch report to this path (batch mode)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging (RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
