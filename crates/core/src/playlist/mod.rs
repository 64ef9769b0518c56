// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

///////////////////////////////////////////////////////////////////////

use crate::track::{UnifiedTrack, index::TrackOrdinal};

/// Tracks in playback order.
///
/// Ordered by track number with unknown track numbers last. Ties
/// are resolved by the discovery index, i.e. the order in which
/// the source files have been found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedPlaylist {
    tracks: Vec<UnifiedTrack>,
}

#[must_use]
pub fn ordering_key(track: &UnifiedTrack) -> (TrackOrdinal, usize) {
    (track.ordinal(), track.discovery_index())
}

impl OrderedPlaylist {
    #[must_use]
    pub fn new(mut tracks: Vec<UnifiedTrack>) -> Self {
        // Stable sort
        tracks.sort_by_key(ordering_key);
        debug_assert!(tracks.is_sorted_by_key(ordering_key));
        Self { tracks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &UnifiedTrack> + '_ {
        self.tracks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[UnifiedTrack] {
        &self.tracks
    }
}

impl FromIterator<UnifiedTrack> for OrderedPlaylist {
    fn from_iter<T: IntoIterator<Item = UnifiedTrack>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OrderedPlaylist {
    type Item = &'a UnifiedTrack;
    type IntoIter = std::slice::Iter<'a, UnifiedTrack>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
