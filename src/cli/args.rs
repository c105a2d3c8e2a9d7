use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logoprep", version, about = "Logo asset preparation CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Optional JSON preset file with processing parameters
    #[arg(long)]
    pub params: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert all supported images in a directory to RGBA PNG
    Convert {
        /// Directory containing the image assets
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Directory receiving original files before mutation
        #[arg(long, default_value = "old")]
        backup_dir: PathBuf,

        /// Skip the copy-before-mutate backup
        #[arg(long, default_value_t = false)]
        no_backup: bool,
    },

    /// Crop PNG files to their visible content bounding box
    Crop {
        /// Directory containing the PNG files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Directory receiving original files before mutation
        #[arg(long, default_value = "old")]
        backup_dir: PathBuf,

        /// Skip the copy-before-mutate backup
        #[arg(long, default_value_t = false)]
        no_backup: bool,

        /// Alpha value above which a pixel counts as content
        #[arg(long)]
        threshold: Option<u8>,

        /// Per-axis crop padding as a fraction of the image dimension
        #[arg(long)]
        padding: Option<f64>,
    },

    /// Verify that PNG files carry an alpha channel
    Verify {
        /// Directory containing the PNG files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Re-encode files that are missing an alpha channel
        #[arg(long, default_value_t = false)]
        fix: bool,
    },

    /// Render an SVG source to an RGBA PNG via the external thumbnailer
    RenderSvg {
        /// Input SVG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Target dimensions as WIDTHxHEIGHT (default: the SVG's natural size)
        #[arg(long)]
        size: Option<String>,

        /// Thumbnailer binary to invoke
        #[arg(long, default_value = "qlmanage")]
        tool: String,
    },
}
