use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::ToolSettings;

use super::error::ExtractError;

pub const FFMPEG: &str = "ffmpeg";

/// Find a working ffmpeg binary.
///
/// A configured `tools.ffmpeg_path` is used when it exists; otherwise ffmpeg
/// is looked up on `PATH`. The binary must answer `-version` successfully.
pub fn locate_ffmpeg(tools: &ToolSettings) -> Result<PathBuf, ExtractError> {
    let path = match &tools.ffmpeg_path {
        Some(p) if p.exists() => p.clone(),
        Some(p) => {
            warn!(path = %p.display(), "configured ffmpeg not found, searching PATH");
            lookup(FFMPEG)?
        }
        None => lookup(FFMPEG)?,
    };

    probe(&path)?;
    debug!(path = %path.display(), "using ffmpeg");
    Ok(path)
}

fn lookup(name: &str) -> Result<PathBuf, ExtractError> {
    which::which(name).map_err(|_| ExtractError::ToolNotFound {
        tool: name.to_string(),
    })
}

fn probe(path: &Path) -> Result<(), ExtractError> {
    let status = Command::new(path)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ExtractError::ToolUnusable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(ExtractError::ToolUnusable {
            path: path.to_path_buf(),
            message: format!("-version exited with {status}"),
        });
    }
    Ok(())
}
