// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use semval::prelude::*;
use thiserror::Error;

use crate::util::string::trimmed_non_empty_from;

pub const TITLE_SUFFIX_SEPARATOR: &str = " - ";

///////////////////////////////////////////////////////////////////////
// ModName
///////////////////////////////////////////////////////////////////////

/// The name of the mod that is appended to every title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModName(String);

#[must_use]
pub fn is_valid_mod_name(name: impl AsRef<str>) -> bool {
    let name = name.as_ref();
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed == name
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModNameInvalidity {
    Empty,
    Untrimmed,
}

impl Validate for ModName {
    type Invalidity = ModNameInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self(name) = self;
        ValidationContext::new()
            .invalidate_if(name.trim().is_empty(), Self::Invalidity::Empty)
            .invalidate_if(
                !name.trim().is_empty() && !is_valid_mod_name(name),
                Self::Invalidity::Untrimmed,
            )
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid mod name \"{0}\"")]
pub struct ModNameError(String);

impl ModName {
    /// Create a new mod name from user input.
    ///
    /// Leading and trailing whitespace is removed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ModNameError> {
        let input = name.as_ref();
        let Some(trimmed) = trimmed_non_empty_from(input) else {
            return Err(ModNameError(input.to_owned()));
        };
        let mod_name = Self(trimmed.into_owned());
        debug_assert!(mod_name.is_valid());
        Ok(mod_name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        let Self(name) = self;
        name
    }

    /// The suffix that is appended to every title, including the separator.
    #[must_use]
    pub fn title_suffix(&self) -> String {
        format!("{TITLE_SUFFIX_SEPARATOR}{name}", name = self.as_str())
    }
}

impl FromStr for ModName {
    type Err = ModNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input)
    }
}

impl AsRef<str> for ModName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ModName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///////////////////////////////////////////////////////////////////////
// Title synthesis
///////////////////////////////////////////////////////////////////////

/// Where the base of a synthesized title comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TitleSource {
    /// The title tag of the source file
    Tag,

    /// The file name without extension
    FileName,
}

/// Synthesize the title of a track.
///
/// Either the title tag (if present and not blank) or the file name is
/// used as the base. Exactly one of them is picked. The suffix of the
/// mod name is appended in both cases.
#[must_use]
pub fn synthesize_title(
    tag_title: Option<&str>,
    file_stem: &str,
    mod_name: &ModName,
) -> (String, TitleSource) {
    let (base, source) = match tag_title.and_then(trimmed_non_empty_from) {
        Some(title) => (title, TitleSource::Tag),
        None => (file_stem.into(), TitleSource::FileName),
    };
    let title = format!("{base}{suffix}", suffix = mod_name.title_suffix());
    (title, source)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
