//! Split one media file into named tracks with ffmpeg.
//!
//! A timing file lists the source media and one `start[|end]|song[|artist]`
//! directive per track. [`timing`] turns it into resolved
//! [`timing::TrackRequest`]s, [`extract`] cuts each one, and [`runtime`] ties
//! both to the command line.

pub mod cli;
pub mod config;
pub mod extract;
pub mod runtime;
pub mod timing;
