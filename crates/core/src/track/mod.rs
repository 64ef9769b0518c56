// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use semval::prelude::*;

use crate::media::SourceAsset;

pub mod index;
use self::index::{TrackNumber, TrackOrdinal};

pub mod title;
use self::title::ModName;

/// A track with metadata in the unified schema.
///
/// The track number is only set after it has been resolved from
/// the output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnifiedTrack {
    pub source: SourceAsset,

    pub output_path: PathBuf,

    pub title: String,

    pub artist: Option<String>,

    pub album: Option<String>,

    pub composer: Option<String>,

    pub track_number: Option<TrackNumber>,
}

impl UnifiedTrack {
    #[must_use]
    pub fn ordinal(&self) -> TrackOrdinal {
        self.track_number.into()
    }

    #[must_use]
    pub fn discovery_index(&self) -> usize {
        self.source.discovery_index
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnifiedTrackInvalidity {
    TitleEmpty,
    TitleSuffixMissing,
}

/// Validation context that requires the mod name.
#[derive(Debug)]
pub struct WithModName<'a> {
    pub track: &'a UnifiedTrack,
    pub mod_name: &'a ModName,
}

impl Validate for WithModName<'_> {
    type Invalidity = UnifiedTrackInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self { track, mod_name } = self;
        ValidationContext::new()
            .invalidate_if(track.title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .invalidate_if(
                !track.title.ends_with(&mod_name.title_suffix()),
                Self::Invalidity::TitleSuffixMissing,
            )
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
