use std::path::Path;

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::prelude::*;
use lofty::tag::Tag;

use super::job::ExtractionJob;

/// Tag the freshly cut track with title, artist and album.
pub(super) fn write_tags(path: &Path, job: &ExtractionJob) -> Result<(), LoftyError> {
    let mut tagged = lofty::read_from_path(path)?;

    if tagged.primary_tag().is_none() {
        let tag_type = tagged.primary_tag_type();
        tagged.insert_tag(Tag::new(tag_type));
    }

    let Some(tag) = tagged.primary_tag_mut() else {
        return Ok(());
    };

    tag.set_title(job.title.clone());
    if let Some(artist) = &job.artist {
        tag.set_artist(artist.clone());
    }
    if !job.album.is_empty() {
        tag.set_album(job.album.clone());
    }

    tag.save_to_path(path, WriteOptions::default())
}
