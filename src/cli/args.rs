use clap::Parser;
use std::path::PathBuf;

use framefit::ResamplingFilter;

#[derive(Parser)]
#[command(name = "framefit", version, about = "FRAMEFIT CLI")]
pub struct CliArgs {
    /// Input photo (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing photos (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON preset with normalization parameters; flags below override it
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Canvas width in pixels (the display's horizontal resolution)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (the display's vertical resolution)
    #[arg(long)]
    pub height: Option<u32>,

    /// Gaussian blur sigma for the portrait background (typical range 20-60)
    #[arg(long)]
    pub blur_sigma: Option<f32>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// Resampling filter (lanczos3, bilinear, bicubic)
    #[arg(long, value_enum)]
    pub filter: Option<ResamplingFilter>,

    /// Batch mode: reprocess files whose output already exists
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
