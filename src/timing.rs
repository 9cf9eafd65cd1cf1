//! Timing file parsing.
//!
//! A timing file names one source media file on its first non-comment line,
//! followed by one directive per track:
//!
//! ```text
//! # comment
//! albums/live.mp3
//! 00:00|Intro
//! 01:30|04:10|Opening Song|The Band
//! 04:10|Closer
//! ```
//!
//! Parsing happens in three layers: [`parse_time`] for a single time token,
//! [`parse_line`] for a directive line, and [`segment`] for the whole file,
//! which also fills in omitted end times from the following track.

mod directive;
mod error;
mod model;
mod segment;
mod time;

pub use directive::parse_line;
pub use error::{DirectiveError, TimingError};
pub use model::*;
pub use segment::{read_timing_file, resolve_end_times, segment};
pub use time::parse_time;

#[cfg(test)]
mod tests;
