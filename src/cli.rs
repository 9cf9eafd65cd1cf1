use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tracksplit")]
#[command(version, about = "Split up a music file into individual tracks")]
pub struct Cli {
    /// Timing files describing how each media file is split
    #[arg(required = true, value_name = "TIMING_FILES")]
    pub timing_files: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the ffmpeg commands without running them
    #[arg(long)]
    pub dry_run: bool,
}
