// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Resolution of track numbers from output files

use std::{io::Error as IoError, path::Path};

use thiserror::Error;

use modtracks_core::{
    TrackNumber, TrackOrdinal, track::index::ParseTrackNumberError, tag::TRACK_NUMBER_KEY,
};

use super::store::UnifiedTagStore;
use crate::Error as MediaError;

mod prompt;
pub use self::prompt::{ConsolePrompt, DeclinePrompt, TrackNumberPrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackNumberResolution {
    /// Read from the unified tags
    Tagged(TrackNumber),

    /// Entered manually and written into the unified tags
    Recovered(TrackNumber),

    /// Manual entry has been declined
    Declined,

    /// Reading, parsing, or writing the track number failed
    Failed,
}

impl TrackNumberResolution {
    #[must_use]
    pub const fn track_number(self) -> Option<TrackNumber> {
        match self {
            Self::Tagged(number) | Self::Recovered(number) => Some(number),
            Self::Declined | Self::Failed => None,
        }
    }

    #[must_use]
    pub fn ordinal(self) -> TrackOrdinal {
        self.track_number().into()
    }
}

#[derive(Debug, Error)]
enum ResolveError {
    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("malformed track number: {0}")]
    Malformed(#[from] ParseTrackNumberError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] IoError),
}

fn try_resolve_track_number(
    store: &dyn UnifiedTagStore,
    prompt: &mut dyn TrackNumberPrompt,
    output_path: &Path,
) -> Result<TrackNumberResolution, ResolveError> {
    let mut tags = store.load(output_path)?;
    if let Some(raw) = tags.get(TRACK_NUMBER_KEY) {
        let number = raw.parse::<TrackNumber>()?;
        return Ok(TrackNumberResolution::Tagged(number));
    }
    if !prompt.confirm_manual_entry(output_path)? {
        return Ok(TrackNumberResolution::Declined);
    }
    let number = prompt
        .enter_track_number(output_path)?
        .parse::<TrackNumber>()?;
    tags.insert(TRACK_NUMBER_KEY, number.to_string());
    store.save(output_path, &tags)?;
    log::info!(
        "Saved track number {number} into {path}",
        path = output_path.display()
    );
    Ok(TrackNumberResolution::Recovered(number))
}

/// Resolve the track number of an output file.
///
/// Missing track numbers are recovered interactively and written back
/// into the output file. Failures are logged and resolved as
/// [`TrackNumberResolution::Failed`] without aborting.
pub fn resolve_track_number(
    store: &dyn UnifiedTagStore,
    prompt: &mut dyn TrackNumberPrompt,
    output_path: &Path,
) -> TrackNumberResolution {
    match try_resolve_track_number(store, prompt, output_path) {
        Ok(resolution) => {
            log::debug!(
                "Resolved track number of {path}: {resolution:?}",
                path = output_path.display()
            );
            resolution
        }
        Err(err) => {
            log::warn!(
                "Error reading track number of {path}: {err}",
                path = output_path.display()
            );
            TrackNumberResolution::Failed
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
