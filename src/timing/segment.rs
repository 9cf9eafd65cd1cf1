use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::directive::parse_line;
use super::error::TimingError;
use super::model::{TimingFile, TrackRequest};

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Read and segment the timing file at `path`.
pub fn read_timing_file(path: &Path) -> Result<TimingFile, TimingError> {
    if !path.exists() {
        return Err(TimingError::MissingTimingFile(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| TimingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    segment(&contents, path)
}

/// Turn the text of a timing file into a resolved [`TimingFile`].
///
/// `origin` names the timing file in diagnostics. The media file named on the
/// first non-comment line must exist; otherwise no directive is parsed. The
/// first malformed directive fails the whole file.
pub fn segment(contents: &str, origin: &Path) -> Result<TimingFile, TimingError> {
    segment_with(contents, origin, Path::exists)
}

pub(crate) fn segment_with(
    contents: &str,
    origin: &Path,
    media_exists: impl Fn(&Path) -> bool,
) -> Result<TimingFile, TimingError> {
    // Line numbers are physical: comments still count.
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !is_comment(line));

    let media = lines
        .next()
        .map(|(_, line)| PathBuf::from(line.trim()))
        .unwrap_or_default();
    if !media_exists(&media) {
        return Err(TimingError::MissingSourceFile {
            media,
            timing_file: origin.to_path_buf(),
        });
    }

    let parsed = lines
        .map(|(number, line)| (number, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            parse_line(line).map_err(|kind| TimingError::MalformedDirective {
                timing_file: origin.to_path_buf(),
                line: number,
                kind,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        timing_file = %origin.display(),
        media = %media.display(),
        tracks = parsed.len(),
        "parsed timing file"
    );

    Ok(TimingFile {
        origin: origin.to_path_buf(),
        media,
        tracks: resolve_end_times(parsed),
    })
}

/// Fill each missing end time with the start of the following track.
///
/// The last track keeps a missing end, meaning "to the end of the source".
/// Ends are not checked against starts.
pub fn resolve_end_times(parsed: Vec<TrackRequest>) -> Vec<TrackRequest> {
    let mut next_start: Option<f64> = None;
    let mut resolved: Vec<TrackRequest> = parsed
        .into_iter()
        .rev()
        .map(|track| {
            let end = track.end.or(next_start);
            next_start = Some(track.start);
            TrackRequest { end, ..track }
        })
        .collect();
    resolved.reverse();
    resolved
}
