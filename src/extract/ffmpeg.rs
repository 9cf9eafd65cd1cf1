use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::SplitSettings;

use super::error::ExtractError;
use super::job::ExtractionJob;
use super::{Extractor, tags};

/// Build the ffmpeg argument list for `job`, writing to `output`.
pub fn ffmpeg_args(job: &ExtractionJob, output: &Path, settings: &SplitSettings) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-ss".into(), job.start.to_string().into()];

    if let Some(duration) = job.duration {
        args.push("-t".into());
        args.push(duration.to_string().into());
    }

    args.push("-i".into());
    args.push(job.media.clone().into_os_string());

    if settings.copy_codec {
        args.push("-c".into());
        args.push("copy".into());
    }

    let overwrite = if settings.overwrite { "-y" } else { "-n" };
    args.push(overwrite.into());
    args.push(output.as_os_str().to_os_string());
    args
}

/// Runs ffmpeg once per track, synchronously.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    program: PathBuf,
    settings: SplitSettings,
}

impl FfmpegExtractor {
    pub fn new(program: PathBuf, settings: SplitSettings) -> Self {
        Self { program, settings }
    }
}

impl Extractor for FfmpegExtractor {
    fn extract(&self, job: &ExtractionJob) -> Result<PathBuf, ExtractError> {
        fs::create_dir_all(&job.output_dir).map_err(|source| ExtractError::OutputDir {
            path: job.output_dir.clone(),
            source,
        })?;

        let output = job.output_path();
        let args = ffmpeg_args(job, &output, &self.settings);
        debug!(program = %self.program.display(), ?args, "running ffmpeg");

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExtractError::Spawn {
                program: self.program.clone(),
                destination: output.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ExtractError::Failed {
                destination: output,
                media: job.media.clone(),
                stderr: String::from_utf8_lossy(&result.stderr).trim_end().to_string(),
            });
        }

        if self.settings.write_tags {
            // Not every container takes tags; the cut itself already succeeded.
            if let Err(e) = tags::write_tags(&output, job) {
                warn!(track = %output.display(), "could not write tags: {e}");
            }
        }

        Ok(output)
    }
}

/// Prints the ffmpeg command for each track instead of running it.
#[derive(Debug, Clone)]
pub struct DryRunExtractor {
    program: PathBuf,
    settings: SplitSettings,
}

impl DryRunExtractor {
    pub fn new(program: PathBuf, settings: SplitSettings) -> Self {
        Self { program, settings }
    }

    /// The ffmpeg invocation for `job` as a line a POSIX shell can run.
    pub fn command_line(&self, job: &ExtractionJob) -> String {
        let output = job.output_path();
        let args = ffmpeg_args(job, &output, &self.settings);

        let mut line = quote(self.program.as_os_str());
        for arg in &args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line
    }
}

impl Extractor for DryRunExtractor {
    fn extract(&self, job: &ExtractionJob) -> Result<PathBuf, ExtractError> {
        println!("{}", self.command_line(job));
        Ok(job.output_path())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_./:=+,-".contains(c)
}

/// Single-quote `arg` unless every character is shell-safe.
pub(super) fn quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
