use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{tool} needs to be installed on this machine and able to be found on the PATH")]
    ToolNotFound { tool: String },

    #[error("{} could not be run: {message}", path.display())]
    ToolUnusable { path: PathBuf, message: String },

    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn {} for track '{}': {source}", program.display(), destination.display())]
    Spawn {
        program: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ffmpeg error on track '{}' in '{}'\nstderr:\n{stderr}", destination.display(), media.display())]
    Failed {
        destination: PathBuf,
        media: PathBuf,
        stderr: String,
    },
}
