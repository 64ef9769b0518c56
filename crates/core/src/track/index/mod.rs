// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, num::NonZeroU32, str::FromStr};

use thiserror::Error;

use crate::util::string::trim_readable;

/// Position of a track within the playlist, starting at 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackNumber(NonZeroU32);

impl TrackNumber {
    pub const MIN: Self = Self(NonZeroU32::MIN);

    #[must_use]
    pub const fn new(number: u32) -> Option<Self> {
        match NonZeroU32::new(number) {
            Some(number) => Some(Self(number)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TrackNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTrackNumberError {
    #[error("empty track number")]
    Empty,

    #[error("invalid track number \"{0}\"")]
    Invalid(String),

    #[error("track numbers start at 1")]
    Zero,
}

impl FromStr for TrackNumber {
    type Err = ParseTrackNumberError;

    /// Parse the number of a track.
    ///
    /// Values of the form "x/y" with x being the track number and y
    /// the total number of tracks are reduced to x. The total is not
    /// validated.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let number = input.split('/').next().map(trim_readable).unwrap_or_default();
        if number.is_empty() {
            return Err(ParseTrackNumberError::Empty);
        }
        let number = number
            .parse::<u32>()
            .map_err(|_| ParseTrackNumberError::Invalid(input.to_owned()))?;
        Self::new(number).ok_or(ParseTrackNumberError::Zero)
    }
}

/// The ordering key of a track.
///
/// Unknown track numbers are ordered after all known track numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackOrdinal {
    // The order of the variants is relevant for the derived `Ord`!
    Number(TrackNumber),
    Unknown,
}

impl From<Option<TrackNumber>> for TrackOrdinal {
    fn from(from: Option<TrackNumber>) -> Self {
        from.map_or(Self::Unknown, Self::Number)
    }
}

impl From<TrackOrdinal> for Option<TrackNumber> {
    fn from(from: TrackOrdinal) -> Self {
        match from {
            TrackOrdinal::Number(number) => Some(number),
            TrackOrdinal::Unknown => None,
        }
    }
}

impl fmt::Display for TrackOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
