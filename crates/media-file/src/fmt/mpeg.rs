// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;

use lofty::{file::AudioFile, mpeg::MpegFile};

use super::{SourceTags, parse_options};
use crate::Result;

pub(crate) fn read_source_tags(file: &mut File) -> Result<SourceTags> {
    let mut mpeg_file = <MpegFile as AudioFile>::read_from(file, parse_options())?;
    let tags = mpeg_file
        .id3v2_mut()
        .map(std::mem::take)
        .map_or(SourceTags::MissingHeader, |id3v2| {
            SourceTags::Id3v2(Box::new(id3v2))
        });
    Ok(tags)
}
