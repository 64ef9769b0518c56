// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use lofty::id3::v2::{FrameId, Id3v2Tag};

use super::TagAdapter;

const TITLE_FRAME_ID: FrameId<'static> = FrameId::Valid(Cow::Borrowed("TIT2"));
const ARTIST_FRAME_ID: FrameId<'static> = FrameId::Valid(Cow::Borrowed("TPE1"));
const ALBUM_FRAME_ID: FrameId<'static> = FrameId::Valid(Cow::Borrowed("TALB"));
const TRACK_NUMBER_FRAME_ID: FrameId<'static> = FrameId::Valid(Cow::Borrowed("TRCK"));

// Only the first of multiple ID3v2.4 values is used.
fn first_text<'a>(tag: &'a Id3v2Tag, frame_id: &FrameId<'_>) -> Option<Cow<'a, str>> {
    tag.get_texts(frame_id)?.next().map(Cow::Borrowed)
}

impl TagAdapter for Id3v2Tag {
    fn read_title(&self) -> Option<Cow<'_, str>> {
        first_text(self, &TITLE_FRAME_ID)
    }

    fn read_artist(&self) -> Option<Cow<'_, str>> {
        first_text(self, &ARTIST_FRAME_ID)
    }

    fn read_album(&self) -> Option<Cow<'_, str>> {
        first_text(self, &ALBUM_FRAME_ID)
    }

    fn read_track_number(&self) -> Option<Cow<'_, str>> {
        first_text(self, &TRACK_NUMBER_FRAME_ID)
    }

    // Composers are not mapped from ID3v2 frames.
    fn read_composer(&self) -> Option<Cow<'_, str>> {
        None
    }
}
