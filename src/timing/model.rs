use std::path::PathBuf;

/// One track to cut out of the source media.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds. `None` on the last track means "until the end
    /// of the source".
    pub end: Option<f64>,
    pub song_name: String,
    pub artist: Option<String>,
}

impl TrackRequest {
    /// Output label: `"<song> by <artist>"`, or just the song name.
    pub fn label(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} by {}", self.song_name, artist),
            None => self.song_name.clone(),
        }
    }

    /// Length of the track when its end is known.
    ///
    /// Not clamped: out-of-order directives give zero or negative lengths.
    pub fn duration(&self) -> Option<f64> {
        self.end.map(|end| end - self.start)
    }
}

/// A fully parsed timing file with end times resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingFile {
    /// The timing file this was read from (used in diagnostics).
    pub origin: PathBuf,
    /// Source media named on the first non-comment line.
    pub media: PathBuf,
    /// Tracks in directive order.
    pub tracks: Vec<TrackRequest>,
}
