//! Cutting tracks out of the source media.
//!
//! The timing parser hands over one [`ExtractionJob`] per track; an
//! [`Extractor`] turns it into a file on disk. [`FfmpegExtractor`] shells out to
//! ffmpeg, [`DryRunExtractor`] only prints what would run.

mod error;
mod ffmpeg;
mod job;
mod tags;
mod tool;

use std::path::PathBuf;

pub use error::ExtractError;
pub use ffmpeg::{DryRunExtractor, FfmpegExtractor, ffmpeg_args};
pub use job::{ExtractionJob, output_dir_for};
pub use tool::{FFMPEG, locate_ffmpeg};

/// Something that can cut one track out of a media file.
pub trait Extractor {
    /// Extract `job`, returning the path of the written track.
    fn extract(&self, job: &ExtractionJob) -> Result<PathBuf, ExtractError>;
}
