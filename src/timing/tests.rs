use super::segment::segment_with;
use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn origin() -> &'static Path {
    Path::new("album.timing")
}

fn always(_: &Path) -> bool {
    true
}

fn never(_: &Path) -> bool {
    false
}

fn track(start: f64, end: Option<f64>, song: &str) -> TrackRequest {
    TrackRequest {
        start,
        end,
        song_name: song.into(),
        artist: None,
    }
}

#[test]
fn first_non_comment_line_is_the_media_path() {
    let tf = segment_with("# header\n# more\nmusic/live.mp3\n00|One\n", origin(), always).unwrap();
    assert_eq!(tf.media, PathBuf::from("music/live.mp3"));
    assert_eq!(tf.origin, PathBuf::from("album.timing"));
    assert_eq!(tf.tracks.len(), 1);
}

#[test]
fn missing_media_yields_one_error_and_no_tracks() {
    let err = segment_with("gone.mp3\n00|One\nbroken line\n", origin(), never).unwrap_err();
    match err {
        TimingError::MissingSourceFile { media, timing_file } => {
            assert_eq!(media, PathBuf::from("gone.mp3"));
            assert_eq!(timing_file, PathBuf::from("album.timing"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_timing_file_is_missing_media() {
    let err = segment_with("", origin(), never).unwrap_err();
    assert!(matches!(err, TimingError::MissingSourceFile { .. }));
}

#[test]
fn missing_end_times_come_from_the_next_start() {
    let contents = "a.mp3\n00|One\n01:00|Two\n02:30|Three\n03:00|04:00|Four\n";
    let tf = segment_with(contents, origin(), always).unwrap();
    assert_eq!(
        tf.tracks,
        vec![
            track(0.0, Some(60.0), "One"),
            track(60.0, Some(150.0), "Two"),
            track(150.0, Some(180.0), "Three"),
            track(180.0, Some(240.0), "Four"),
        ]
    );
}

#[test]
fn explicit_end_times_are_kept() {
    let tf = segment_with("a.mp3\n00|30|One\n01:00|Two\n", origin(), always).unwrap();
    assert_eq!(tf.tracks[0].end, Some(30.0));
    assert_eq!(tf.tracks[1].end, None);
}

#[test]
fn last_track_without_end_stays_open() {
    let tf = segment_with("a.mp3\n10|Only\n", origin(), always).unwrap();
    assert_eq!(tf.tracks, vec![track(10.0, None, "Only")]);
    assert_eq!(tf.tracks[0].duration(), None);
}

#[test]
fn media_line_alone_gives_no_tracks() {
    let tf = segment_with("a.mp3\n", origin(), always).unwrap();
    assert!(tf.tracks.is_empty());
}

#[test]
fn comments_never_become_tracks() {
    let contents = "a.mp3\n00|One\n# 00:30|Commented\n01:00|Two\n";
    let tf = segment_with(contents, origin(), always).unwrap();
    let names: Vec<&str> = tf.tracks.iter().map(|t| t.song_name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two"]);
    assert_eq!(tf.tracks[0].end, Some(60.0));
}

#[test]
fn blank_lines_are_skipped_and_lines_are_trimmed() {
    let contents = "  a.mp3  \r\n\r\n00|One\r\n   \r\n  01:00|Two  \r\n";
    let tf = segment_with(contents, origin(), always).unwrap();
    assert_eq!(tf.media, PathBuf::from("a.mp3"));
    assert_eq!(tf.tracks.len(), 2);
    assert_eq!(tf.tracks[1].song_name, "Two");
}

#[test]
fn malformed_line_reports_physical_line_number() {
    let contents = "# c1\na.mp3\n00|One\n# c2\n\nnot a time|Two\n02:00|Three\n";
    let err = segment_with(contents, origin(), always).unwrap_err();
    match err {
        TimingError::MalformedDirective {
            timing_file,
            line,
            kind,
        } => {
            assert_eq!(timing_file, PathBuf::from("album.timing"));
            assert_eq!(line, 6);
            assert_eq!(kind, DirectiveError::InvalidStartTime);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_directive_message_names_file_and_line() {
    let err = segment_with("a.mp3\n10\n", origin(), always).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'album.timing' at line 2 must have a start time and a song name"
    );
}

#[test]
fn overlapping_directives_are_accepted() {
    let tf = segment_with("a.mp3\n01:00|One\n00:30|Two\n", origin(), always).unwrap();
    assert_eq!(tf.tracks[0].end, Some(30.0));
    assert_eq!(tf.tracks[0].duration(), Some(-30.0));
}

#[test]
fn segmenting_twice_gives_the_same_tracks() {
    let contents = "a.mp3\n00|One|Band\n01:00|02:00|Two\n03:00|Three\n";
    let first = segment_with(contents, origin(), always).unwrap();
    let second = segment_with(contents, origin(), always).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolve_end_times_handles_empty_and_single() {
    assert!(resolve_end_times(Vec::new()).is_empty());
    assert_eq!(
        resolve_end_times(vec![track(5.0, None, "A")]),
        vec![track(5.0, None, "A")]
    );
}

#[test]
fn label_appends_artist() {
    let mut t = track(0.0, None, "Song");
    assert_eq!(t.label(), "Song");
    t.artist = Some("Band".into());
    assert_eq!(t.label(), "Song by Band");
}

#[test]
fn read_timing_file_checks_media_on_disk() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("set.flac");
    fs::write(&media, b"not real audio").unwrap();

    let timing = dir.path().join("set.timing");
    fs::write(
        &timing,
        format!("# my set\n{}\n00|Warmup\n05:00|Peak|DJ\n", media.display()),
    )
    .unwrap();

    let tf = read_timing_file(&timing).unwrap();
    assert_eq!(tf.media, media);
    assert_eq!(tf.tracks[0].end, Some(300.0));
    assert_eq!(tf.tracks[1].label(), "Peak by DJ");

    let missing = dir.path().join("nope.flac");
    fs::write(&timing, format!("{}\n00|Warmup\n", missing.display())).unwrap();
    let err = read_timing_file(&timing).unwrap_err();
    assert!(err.to_string().contains("nope.flac"));
    assert!(err.to_string().contains("doesn't exist"));
}

#[test]
fn read_timing_file_reports_missing_timing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.timing");
    let err = read_timing_file(&path).unwrap_err();
    assert!(matches!(err, TimingError::MissingTimingFile(p) if p == path));
}

#[test]
fn read_timing_file_reports_non_utf8_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.timing");
    fs::write(&path, b"\xff\xfe").unwrap();

    let err = read_timing_file(&path).unwrap_err();
    match &err {
        TimingError::Read { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to read"));
}
