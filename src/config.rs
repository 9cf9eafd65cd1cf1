//! Configuration loader and schema types.
//!
//! Settings control how tracks are cut (codec copy, overwrite, tagging) and
//! where the ffmpeg binary lives. Everything has a default, so no config file
//! is required.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
