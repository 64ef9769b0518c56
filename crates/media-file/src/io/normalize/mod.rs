// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Mapping of source tags into the unified schema

use std::{borrow::Cow, path::Path};

use itertools::Itertools as _;

use modtracks_core::{
    ModName, SourceAsset, UnifiedTags, UnifiedTrack,
    tag::{ALBUM_KEY, ARTIST_KEY, COMPOSER_KEY, TITLE_KEY, TRACK_NUMBER_KEY},
    track::title::{TitleSource, synthesize_title},
    util::string::trimmed_non_empty_from,
};

use super::{Issues, store::UnifiedTagStore};
use crate::{
    Result,
    fmt::{SourceTags, TagAdapter, read_source_tags},
    fs::ensure_output_file,
};

/// The descriptive fields of a track after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub title: String,
    pub title_source: TitleSource,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub composer: Option<String>,
}

fn read_field(value: Option<Cow<'_, str>>) -> Option<String> {
    value.and_then(trimmed_non_empty_from).map(Cow::into_owned)
}

/// Apply the fields of the source tags onto the unified tags.
///
/// Existing unified tags are only replaced if the source provides
/// a value for the same key. The title is always written last.
pub fn apply_unified_tags(
    adapter: &dyn TagAdapter,
    file_stem: &str,
    mod_name: &ModName,
    tags: &mut UnifiedTags,
) -> NormalizedFields {
    let artist = read_field(adapter.read_artist());
    let album = read_field(adapter.read_album());
    let composer = read_field(adapter.read_composer());
    let track_number = read_field(adapter.read_track_number());
    for (key, value) in [
        (ARTIST_KEY, &artist),
        (ALBUM_KEY, &album),
        (COMPOSER_KEY, &composer),
        (TRACK_NUMBER_KEY, &track_number),
    ] {
        if let Some(value) = value {
            tags.insert(key, value.as_str());
        }
    }

    let passthrough_items = adapter.passthrough_items();
    let passthrough_keys = passthrough_items
        .iter()
        .map(|(key, _)| key.to_ascii_uppercase())
        .unique()
        .collect::<Vec<_>>();
    for key in passthrough_keys {
        debug_assert_ne!(TITLE_KEY, key);
        let values = passthrough_items
            .iter()
            .filter(|(item_key, _)| item_key.eq_ignore_ascii_case(&key))
            .map(|(_, value)| *value);
        tags.replace_all(&key, values);
    }

    let (title, title_source) =
        synthesize_title(adapter.read_title().as_deref(), file_stem, mod_name);
    tags.insert(TITLE_KEY, title.as_str());

    NormalizedFields {
        title,
        title_source,
        artist,
        album,
        composer,
    }
}

#[derive(Debug)]
pub struct Normalized {
    /// The track without a track number
    pub track: UnifiedTrack,

    /// The output file has been created by copying the source file
    pub output_created: bool,

    /// Unified tags have been written into the output file
    pub tags_written: bool,

    pub issues: Issues,
}

/// Normalize the metadata of a single asset into its output file.
///
/// The output file is created as a copy of the source file if it
/// does not exist yet. Unreadable source tags result in a title that
/// is derived from the file name. Metadata of unsupported formats is
/// not translated.
pub fn normalize_asset(
    asset: &SourceAsset,
    output_path: &Path,
    mod_name: &ModName,
    store: &dyn UnifiedTagStore,
) -> Result<Normalized> {
    let mut issues = Issues::new();
    let source_tags = read_source_tags(asset, &mut issues);
    normalize_source_tags(asset, &source_tags, issues, output_path, mod_name, store)
}

/// Normalize source tags that have already been read.
///
/// The issues that occurred while reading are passed through.
pub fn normalize_source_tags(
    asset: &SourceAsset,
    source_tags: &SourceTags,
    issues: Issues,
    output_path: &Path,
    mod_name: &ModName,
    store: &dyn UnifiedTagStore,
) -> Result<Normalized> {
    let output_created = ensure_output_file(&asset.path, output_path)?;
    let file_stem = asset.file_stem();
    let (fields, tags_written) = if matches!(source_tags, SourceTags::Unsupported) {
        let mut unwritten_tags = UnifiedTags::new();
        let fields = apply_unified_tags(source_tags, &file_stem, mod_name, &mut unwritten_tags);
        (fields, false)
    } else {
        let mut tags = match store.load(output_path) {
            Ok(tags) => tags,
            Err(err) => {
                log::warn!(
                    "Failed to load existing tags from {path}: {err}",
                    path = output_path.display()
                );
                UnifiedTags::new()
            }
        };
        let fields = apply_unified_tags(source_tags, &file_stem, mod_name, &mut tags);
        store.save(output_path, &tags)?;
        (fields, true)
    };
    log::debug!(
        "Normalized {source} into {output}: {fields:?}",
        source = asset.path.display(),
        output = output_path.display()
    );
    let NormalizedFields {
        title,
        title_source: _,
        artist,
        album,
        composer,
    } = fields;
    let track = UnifiedTrack {
        source: asset.clone(),
        output_path: output_path.to_owned(),
        title,
        artist,
        album,
        composer,
        track_number: None,
    };
    Ok(Normalized {
        track,
        output_created,
        tags_written,
        issues,
    })
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
