// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;

use lofty::{file::AudioFile, flac::FlacFile};

use super::{SourceTags, parse_options};
use crate::Result;

pub(crate) fn read_source_tags(file: &mut File) -> Result<SourceTags> {
    let mut flac_file = <FlacFile as AudioFile>::read_from(file, parse_options())?;
    let tags = flac_file
        .vorbis_comments_mut()
        .map(std::mem::take)
        .map_or(SourceTags::MissingHeader, SourceTags::Vorbis);
    Ok(tags)
}
