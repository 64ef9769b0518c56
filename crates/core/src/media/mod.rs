// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use strum::{Display, EnumIter};

/// Container format of a source file
///
/// Detected once from the file extension. Files that are recognized
/// as audio but cannot be handled are represented explicitly by
/// [`SourceFormat::Unsupported`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SourceFormat {
    Mp3,
    Flac,
    Mp4,
    Wav,
    Ogg,
    Unsupported,
}

impl SourceFormat {
    #[must_use]
    pub fn from_file_ext(file_ext: &str) -> Self {
        match file_ext.to_ascii_lowercase().as_str() {
            "mp3" => Self::Mp3,
            "flac" => Self::Flac,
            "m4a" | "mp4" => Self::Mp4,
            "wav" => Self::Wav,
            "ogg" => Self::Ogg,
            _ => Self::Unsupported,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(OsStr::to_str)
            .map_or(Self::Unsupported, Self::from_file_ext)
    }

    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Formats that need to be converted by the transcoding engine
    ///
    /// Ogg files are already in the target container and unsupported
    /// files are copied verbatim.
    #[must_use]
    pub const fn needs_transcoding(self) -> bool {
        matches!(self, Self::Mp3 | Self::Flac | Self::Mp4 | Self::Wav)
    }
}

/// An audio file as it has been found during discovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceAsset {
    pub path: PathBuf,

    pub format: SourceFormat,

    /// Position in the order of discovery
    ///
    /// Used as the stable tie-breaker when ordering tracks.
    pub discovery_index: usize,
}

impl SourceAsset {
    #[must_use]
    pub fn detect(path: impl Into<PathBuf>, discovery_index: usize) -> Self {
        let path = path.into();
        let format = SourceFormat::from_path(&path);
        Self {
            path,
            format,
            discovery_index,
        }
    }

    /// The file name without its extension
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The file extension including the leading dot, e.g. ".mp3"
    #[must_use]
    pub fn dotted_file_ext(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{ext}", ext = ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
