// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{borrow::Cow, fs::File};

use lofty::{
    file::AudioFile,
    mp4::{AtomData, AtomIdent, Ilst, Mp4File},
    tag::Accessor,
};

use super::{SourceTags, TagAdapter, parse_options};
use crate::Result;

const TITLE_IDENT: AtomIdent<'static> = AtomIdent::Fourcc(*b"\xa9nam");
const ARTIST_IDENT: AtomIdent<'static> = AtomIdent::Fourcc(*b"\xa9ART");
const ALBUM_IDENT: AtomIdent<'static> = AtomIdent::Fourcc(*b"\xa9alb");
const COMPOSER_IDENT: AtomIdent<'static> = AtomIdent::Fourcc(*b"\xa9wrt");

fn first_utf8<'a>(ilst: &'a Ilst, ident: &AtomIdent<'_>) -> Option<Cow<'a, str>> {
    ilst.get(ident)?.data().find_map(|data| match data {
        AtomData::UTF8(text) => Some(Cow::Borrowed(text.as_str())),
        _ => None,
    })
}

impl TagAdapter for Ilst {
    fn read_title(&self) -> Option<Cow<'_, str>> {
        first_utf8(self, &TITLE_IDENT)
    }

    fn read_artist(&self) -> Option<Cow<'_, str>> {
        first_utf8(self, &ARTIST_IDENT)
    }

    fn read_album(&self) -> Option<Cow<'_, str>> {
        first_utf8(self, &ALBUM_IDENT)
    }

    /// The first component of the `trkn` pair, if not zero.
    fn read_track_number(&self) -> Option<Cow<'_, str>> {
        Accessor::track(self)
            .filter(|number| *number > 0)
            .map(|number| Cow::Owned(number.to_string()))
    }

    fn read_composer(&self) -> Option<Cow<'_, str>> {
        first_utf8(self, &COMPOSER_IDENT)
    }
}

pub(crate) fn read_source_tags(file: &mut File) -> Result<SourceTags> {
    let mut mp4_file = <Mp4File as AudioFile>::read_from(file, parse_options())?;
    let tags = mp4_file
        .ilst_mut()
        .map(std::mem::take)
        .map_or(SourceTags::MissingHeader, SourceTags::Mp4);
    Ok(tags)
}
