use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stitch2png")]
#[command(about = "Render an embroidery pattern into a thumbnail image")]
#[command(version)]
pub struct Cli {
    /// Input pattern file
    pub input: PathBuf,

    /// Output image file (format taken from the extension)
    pub output: PathBuf,

    /// Thumbnail size in pixels (default: 256)
    #[arg(short, long, default_value_t = stitch2png::DEFAULT_SIZE, allow_negative_numbers = true)]
    pub size: i64,

    /// Log each pipeline stage
    #[arg(short, long)]
    pub verbose: bool,
}
