// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;

use lofty::{file::AudioFile, ogg::VorbisFile};

use super::{SourceTags, parse_options};
use crate::Result;

/// Ogg Vorbis files always contain a comment header, although it might be empty.
pub(crate) fn read_source_tags(file: &mut File) -> Result<SourceTags> {
    let mut ogg_file = <VorbisFile as AudioFile>::read_from(file, parse_options())?;
    let vorbis_comments = std::mem::take(ogg_file.vorbis_comments_mut());
    Ok(SourceTags::Vorbis(vorbis_comments))
}
