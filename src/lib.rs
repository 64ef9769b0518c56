// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Normalize the metadata of audio files and order them into a playlist

pub use modtracks_core as core;

#[cfg(feature = "media-file")]
pub use modtracks_media_file as media_file;

#[cfg(feature = "usecases")]
pub use modtracks_usecases as usecases;

pub mod prelude {
    pub use crate::core::{
        ModName, OrderedPlaylist, SourceAsset, SourceFormat, TrackNumber, TrackOrdinal,
        UnifiedTags, UnifiedTrack,
    };
}
