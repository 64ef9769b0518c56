// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use lofty::ogg::VorbisComments;

use modtracks_core::tag::{
    ALBUM_KEY, ARTIST_KEY, COMPOSER_KEY, TITLE_KEY, TRACK_NUMBER_KEY, is_title_key,
};

use super::TagAdapter;

// Keys are matched case-insensitively, i.e. both "title" and "TITLE" are found.
fn first_value<'a>(comments: &'a VorbisComments, key: &str) -> Option<Cow<'a, str>> {
    comments.get(key).map(Cow::Borrowed)
}

impl TagAdapter for VorbisComments {
    fn read_title(&self) -> Option<Cow<'_, str>> {
        first_value(self, TITLE_KEY)
    }

    fn read_artist(&self) -> Option<Cow<'_, str>> {
        first_value(self, ARTIST_KEY)
    }

    fn read_album(&self) -> Option<Cow<'_, str>> {
        first_value(self, ALBUM_KEY)
    }

    fn read_track_number(&self) -> Option<Cow<'_, str>> {
        first_value(self, TRACK_NUMBER_KEY)
    }

    fn read_composer(&self) -> Option<Cow<'_, str>> {
        first_value(self, COMPOSER_KEY)
    }

    fn passthrough_items(&self) -> Vec<(&str, &str)> {
        self.items().filter(|(key, _)| !is_title_key(key)).collect()
    }
}
