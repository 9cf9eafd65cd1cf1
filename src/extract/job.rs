use std::path::{Path, PathBuf};

use crate::timing::TrackRequest;

/// Everything an extractor needs to cut one track.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionJob {
    pub media: PathBuf,
    /// Start offset in seconds.
    pub start: f64,
    /// Length in seconds; `None` runs to the end of the media.
    pub duration: Option<f64>,
    /// File name of the track, without extension.
    pub label: String,
    pub output_dir: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    /// Album tag: the media file's stem.
    pub album: String,
}

impl ExtractionJob {
    pub fn new(media: &Path, track: &TrackRequest) -> Self {
        let album = media
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            media: media.to_path_buf(),
            start: track.start,
            duration: track.duration(),
            label: track.label(),
            output_dir: output_dir_for(media),
            title: track.song_name.clone(),
            artist: track.artist.clone(),
            album,
        }
    }

    /// `<output_dir>/<label><media extension>`.
    pub fn output_path(&self) -> PathBuf {
        let file_name = match self.media.extension() {
            Some(ext) => format!("{}.{}", self.label, ext.to_string_lossy()),
            None => self.label.clone(),
        };
        self.output_dir.join(file_name)
    }
}

/// Tracks of `music/live.mp3` go to `music/live/`.
pub fn output_dir_for(media: &Path) -> PathBuf {
    let parent = media.parent().unwrap_or_else(|| Path::new(""));
    match media.file_stem() {
        Some(stem) => parent.join(stem),
        None => parent.to_path_buf(),
    }
}
