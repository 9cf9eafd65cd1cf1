use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single directive line was rejected.
///
/// Carries no file or line context; [`TimingError::MalformedDirective`] adds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("must have a start time and a song name")]
    MissingFields,
    #[error("must follow the correct time syntax in the start time")]
    InvalidStartTime,
    #[error("must have a song name")]
    MissingSongName,
}

#[derive(Debug, Error)]
pub enum TimingError {
    #[error("the file '{}' doesn't exist", .0.display())]
    MissingTimingFile(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the given music file '{}' in '{}' doesn't exist", media.display(), timing_file.display())]
    MissingSourceFile { media: PathBuf, timing_file: PathBuf },

    #[error("'{}' at line {line} {kind}", timing_file.display())]
    MalformedDirective {
        timing_file: PathBuf,
        line: usize,
        kind: DirectiveError,
    },
}
