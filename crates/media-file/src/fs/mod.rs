// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use modtracks_core::SourceAsset;

use crate::Result;

pub mod visit;

/// File extension of all converted or copied audio files
pub const OUTPUT_FILE_EXT: &str = "ogg";

/// The path of the output file of an asset.
///
/// Assets with an unsupported format keep their file extension,
/// because they are copied without conversion.
#[must_use]
pub fn output_file_path(asset: &SourceAsset, output_dir: &Path, output_suffix: &str) -> PathBuf {
    let mut file_name = OsString::from(asset.file_stem());
    file_name.push(output_suffix);
    if asset.format.is_supported() {
        file_name.push(".");
        file_name.push(OUTPUT_FILE_EXT);
    } else if let Some(ext) = asset.path.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    output_dir.join(file_name)
}

/// Create the output file as a byte copy of the source file.
///
/// Returns `false` if the output file already exists and has
/// not been touched.
pub fn ensure_output_file(source_path: &Path, output_path: &Path) -> Result<bool> {
    if output_path.is_file() {
        return Ok(false);
    }
    if let Some(parent_dir) = output_path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    let copied_bytes = fs::copy(source_path, output_path)?;
    log::debug!(
        "Copied {copied_bytes} byte(s) from {source} to {output}",
        source = source_path.display(),
        output = output_path.display()
    );
    Ok(true)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
