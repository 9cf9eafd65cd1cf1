use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use crate::cli::Cli;
use crate::extract::{self, DryRunExtractor, Extractor, FfmpegExtractor};

mod logging;
mod settings;
mod split;

pub use split::{SplitError, split_timing_file};

pub fn run(cli: Cli) -> ExitCode {
    logging::init(cli.verbose);
    let settings = settings::load_settings(cli.config.as_deref());

    let extractor: Box<dyn Extractor> = if cli.dry_run {
        let program = settings
            .tools
            .ffmpeg_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(extract::FFMPEG));
        Box::new(DryRunExtractor::new(program, settings.split.clone()))
    } else {
        match extract::locate_ffmpeg(&settings.tools) {
            Ok(program) => Box::new(FfmpegExtractor::new(program, settings.split.clone())),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let mut failed = 0usize;
    for path in &cli.timing_files {
        // Each timing file stands alone: a failure never stops the next one.
        if let Err(e) = split_timing_file(path, extractor.as_ref()) {
            debug!(timing_file = %path.display(), "split failed");
            eprintln!("{e}");
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
