use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::extract::{ExtractError, ExtractionJob, Extractor};
use crate::timing::{self, TimingError};

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error("track {number}/{total}: {source}")]
    Extract {
        number: usize,
        total: usize,
        #[source]
        source: ExtractError,
    },
}

/// Parse one timing file and extract its tracks in order.
///
/// Nothing is extracted unless the whole file parses. The first failed
/// extraction stops the file; tracks already written stay on disk. Returns the
/// number of tracks written.
pub fn split_timing_file(path: &Path, extractor: &dyn Extractor) -> Result<usize, SplitError> {
    let timing = timing::read_timing_file(path)?;
    let total = timing.tracks.len();
    debug!(
        timing_file = %path.display(),
        media = %timing.media.display(),
        total,
        "splitting"
    );

    println!("Splitting '{}'...", timing.media.display());
    for (idx, track) in timing.tracks.iter().enumerate() {
        let number = idx + 1;
        let job = ExtractionJob::new(&timing.media, track);
        let written = extractor
            .extract(&job)
            .map_err(|source| SplitError::Extract {
                number,
                total,
                source,
            })?;
        debug!(track = %written.display(), "wrote track");
        println!(
            "Splitting '{}' at track #{number}/{total}",
            timing.media.display()
        );
    }
    println!(
        "Finished splitting '{}' for {total} tracks",
        timing.media.display()
    );

    Ok(total)
}
