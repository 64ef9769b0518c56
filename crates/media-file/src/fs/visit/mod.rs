// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Discovery of source assets

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use modtracks_core::{SourceAsset, SourceFormat};

use crate::{Error, Result};

fn is_hidden_dir_entry(dir_entry: &DirEntry) -> bool {
    dir_entry
        .file_name()
        .to_str()
        .is_some_and(|file_name| file_name.starts_with('.'))
}

fn is_audio_file_path(path: &Path) -> bool {
    mime_guess::from_path(path)
        .iter()
        .any(|mime| mime.type_() == mime::AUDIO)
}

/// Previously produced output files must not be processed again.
fn is_output_file_path(path: &Path, output_suffix: &str) -> bool {
    !output_suffix.is_empty()
        && path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(output_suffix))
}

/// Discover the audio files directly within a directory.
///
/// Files are visited in the order of their names. Audio files with
/// an unsupported format are discovered as [`SourceFormat::Unsupported`]
/// while all other files are skipped silently.
pub fn discover_source_assets(dir_path: &Path, output_suffix: &str) -> Result<Vec<SourceAsset>> {
    let mut assets = Vec::new();
    let walkdir = WalkDir::new(dir_path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for dir_entry in walkdir
        .into_iter()
        .filter_entry(|dir_entry| !is_hidden_dir_entry(dir_entry))
    {
        let dir_entry = dir_entry.map_err(|err| Error::Other(err.into()))?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        let path = dir_entry.path();
        if is_output_file_path(path, output_suffix) {
            log::debug!("Skipping output file {path}", path = path.display());
            continue;
        }
        if SourceFormat::from_path(path) == SourceFormat::Unsupported && !is_audio_file_path(path)
        {
            log::debug!("Skipping non-audio file {path}", path = path.display());
            continue;
        }
        let asset = SourceAsset::detect(path, assets.len());
        log::debug!(
            "Discovered {format} file {path}",
            format = asset.format,
            path = asset.path.display()
        );
        assets.push(asset);
    }
    Ok(assets)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
