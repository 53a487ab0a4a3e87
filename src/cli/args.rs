use clap::Parser;
use std::path::PathBuf;

use primitive_transform::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "primitive-transform",
    version,
    about = "Reproduce images with geometric primitives using the `primitive` tool"
)]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing png/jpg images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output image; its extension decides the rendered format (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Number of shapes to draw [default: 100]
    #[arg(short = 'n', long)]
    pub shapes: Option<u32>,

    /// Shape family (combo, triangle, rect, ellipse, circle, rotated-rect,
    /// beziers, rotated-ellipse, polygon)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Path to the `primitive` executable (defaults to searching PATH)
    #[arg(long)]
    pub primitive_bin: Option<PathBuf>,

    /// JSON preset with shape_count, mode, extra_flags and program;
    /// command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with the remaining images when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Extra flags passed to `primitive` verbatim, given after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}
