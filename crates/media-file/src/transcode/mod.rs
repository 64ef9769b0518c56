// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Binding of the external transcoding engine

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use thiserror::Error;

use modtracks_core::SourceFormat;

/// Environment variable for overriding the location of `ffmpeg`
pub const FFMPEG_PATH_ENV: &str = "FFMPEG_PATH";

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error(
        "ffmpeg executable not found. Install ffmpeg and add it to PATH, or set the FFMPEG_PATH environment variable"
    )]
    EngineNotFound,

    #[error("cannot transcode {format} files")]
    UnsupportedFormat { format: SourceFormat },

    #[error("failed to spawn transcoding engine: {0}")]
    SpawnFailed(#[source] io::Error),

    #[error("transcoding {} failed with exit code {exit_code}: {stderr}", .source_path.display())]
    Failed {
        source_path: PathBuf,
        exit_code: i32,
        stderr: String,
    },

    #[error("transcoded file not found: {}", .output_path.display())]
    OutputMissing { output_path: PathBuf },
}

pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Converts audio files into Ogg Vorbis files.
///
/// Conversion is synchronous and either succeeds completely or fails.
pub trait Transcoder {
    /// Returns the path of the converted file.
    fn convert(
        &self,
        source_path: &Path,
        source_format: SourceFormat,
        output_path: &Path,
    ) -> TranscodeResult<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    ffmpeg_path: PathBuf,
}

impl FfmpegTranscoder {
    #[must_use]
    pub const fn new(ffmpeg_path: PathBuf) -> Self {
        Self { ffmpeg_path }
    }

    /// Locate the `ffmpeg` executable.
    ///
    /// An explicit path takes precedence over the environment and
    /// the search path.
    pub fn locate(explicit_path: Option<&Path>) -> TranscodeResult<Self> {
        if let Some(path) = explicit_path {
            if path.is_file() {
                return Ok(Self::new(path.to_owned()));
            }
            log::warn!(
                "ffmpeg executable not found at {path}",
                path = path.display()
            );
        }
        if let Some(path) = std::env::var_os(FFMPEG_PATH_ENV).map(PathBuf::from) {
            if path.is_file() {
                return Ok(Self::new(path));
            }
            log::warn!(
                "ffmpeg executable from {FFMPEG_PATH_ENV} not found at {path}",
                path = path.display()
            );
        }
        which::which("ffmpeg")
            .map(Self::new)
            .map_err(|_| TranscodeError::EngineNotFound)
    }

    #[must_use]
    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg_path
    }
}

impl Transcoder for FfmpegTranscoder {
    fn convert(
        &self,
        source_path: &Path,
        source_format: SourceFormat,
        output_path: &Path,
    ) -> TranscodeResult<PathBuf> {
        if !source_format.needs_transcoding() {
            return Err(TranscodeError::UnsupportedFormat {
                format: source_format,
            });
        }
        log::info!(
            "Converting {source} into {output}",
            source = source_path.display(),
            output = output_path.display()
        );
        // All source metadata is stripped. Only the unified tags
        // are written afterwards.
        let output = Command::new(&self.ffmpeg_path)
            .args(["-hide_banner", "-loglevel", "error", "-nostdin", "-y", "-i"])
            .arg(source_path)
            .args(["-vn", "-map_metadata", "-1", "-c:a", "libvorbis", "-f", "ogg"])
            .arg(output_path)
            .stdin(Stdio::null())
            .output()
            .map_err(TranscodeError::SpawnFailed)?;
        if !output.status.success() {
            return Err(TranscodeError::Failed {
                source_path: source_path.to_owned(),
                exit_code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        if !output_path.is_file() {
            return Err(TranscodeError::OutputMissing {
                output_path: output_path.to_owned(),
            });
        }
        Ok(output_path.to_owned())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
