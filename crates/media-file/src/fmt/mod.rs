// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tag adapters for the supported source formats
//!
//! Each adapter exposes the same optional field accessors, no matter
//! how the underlying tag container stores them.

use std::{borrow::Cow, fs::File};

use lofty::{config::ParseOptions, id3::v2::Id3v2Tag, mp4::Ilst, ogg::VorbisComments};

use modtracks_core::{SourceAsset, SourceFormat};

use crate::{Result, io::Issues};

pub mod flac;
pub mod id3v2;
pub mod mp4;
pub mod mpeg;
pub mod ogg;
pub mod vorbis;
pub mod wav;

/// Read access to the descriptive fields of a tag container.
///
/// An absent value means that the field is not set. Reading never fails.
pub trait TagAdapter {
    fn read_title(&self) -> Option<Cow<'_, str>>;

    fn read_artist(&self) -> Option<Cow<'_, str>>;

    fn read_album(&self) -> Option<Cow<'_, str>>;

    /// The raw track number, e.g. "3" or "3/12"
    fn read_track_number(&self) -> Option<Cow<'_, str>>;

    fn read_composer(&self) -> Option<Cow<'_, str>>;

    /// Free-form items that are copied verbatim, excluding the title.
    fn passthrough_items(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }
}

/// The tag container of a source file, selected by its format.
#[derive(Debug)]
pub enum SourceTags {
    /// MP3 and WAV
    Id3v2(Box<Id3v2Tag>),

    /// FLAC and Ogg
    Vorbis(VorbisComments),

    Mp4(Ilst),

    /// The file does not contain a tag container at all
    MissingHeader,

    /// The tag container could not be read
    Unreadable,

    /// Metadata of this format is not translated
    Unsupported,
}

impl SourceTags {
    fn adapter(&self) -> Option<&dyn TagAdapter> {
        match self {
            Self::Id3v2(tag) => Some(tag.as_ref()),
            Self::Vorbis(comments) => Some(comments),
            Self::Mp4(ilst) => Some(ilst),
            Self::MissingHeader | Self::Unreadable | Self::Unsupported => None,
        }
    }
}

impl TagAdapter for SourceTags {
    fn read_title(&self) -> Option<Cow<'_, str>> {
        self.adapter()?.read_title()
    }

    fn read_artist(&self) -> Option<Cow<'_, str>> {
        self.adapter()?.read_artist()
    }

    fn read_album(&self) -> Option<Cow<'_, str>> {
        self.adapter()?.read_album()
    }

    fn read_track_number(&self) -> Option<Cow<'_, str>> {
        self.adapter()?.read_track_number()
    }

    fn read_composer(&self) -> Option<Cow<'_, str>> {
        self.adapter()?.read_composer()
    }

    fn passthrough_items(&self) -> Vec<(&str, &str)> {
        self.adapter()
            .map(TagAdapter::passthrough_items)
            .unwrap_or_default()
    }
}

#[must_use]
pub(crate) fn parse_options() -> ParseOptions {
    ParseOptions::new().read_properties(false)
}

fn try_read_source_tags(asset: &SourceAsset) -> Result<SourceTags> {
    let format = asset.format;
    if !format.is_supported() {
        return Ok(SourceTags::Unsupported);
    }
    let mut file = File::open(&asset.path)?;
    match format {
        SourceFormat::Mp3 => mpeg::read_source_tags(&mut file),
        SourceFormat::Wav => wav::read_source_tags(&mut file),
        SourceFormat::Flac => flac::read_source_tags(&mut file),
        SourceFormat::Mp4 => mp4::read_source_tags(&mut file),
        SourceFormat::Ogg => ogg::read_source_tags(&mut file),
        SourceFormat::Unsupported => Ok(SourceTags::Unsupported),
    }
}

/// Read the tag container of a source file.
///
/// Failures are recorded as issues and result in [`SourceTags::Unreadable`].
#[must_use]
pub fn read_source_tags(asset: &SourceAsset, issues: &mut Issues) -> SourceTags {
    match try_read_source_tags(asset) {
        Ok(SourceTags::MissingHeader) => {
            let message = match asset.format {
                SourceFormat::Mp3 | SourceFormat::Wav => format!(
                    "No ID3 header found in {path}. Generating metadata from the file name.",
                    path = asset.path.display()
                ),
                format => format!(
                    "No {format} tags found in {path}. Generating metadata from the file name.",
                    path = asset.path.display()
                ),
            };
            log::warn!("{message}");
            issues.add_message(message);
            SourceTags::MissingHeader
        }
        Ok(SourceTags::Unsupported) => {
            let message = format!(
                "Copying metadata from {ext} files is not supported: {path}",
                ext = asset.dotted_file_ext(),
                path = asset.path.display()
            );
            log::warn!("{message}");
            issues.add_message(message);
            SourceTags::Unsupported
        }
        Ok(tags) => tags,
        Err(err) => {
            let message = format!(
                "Failed to read tags from {path}: {err}",
                path = asset.path.display()
            );
            log::warn!("{message}");
            issues.add_message(message);
            SourceTags::Unreadable
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
