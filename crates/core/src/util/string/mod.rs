// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

#[must_use]
pub fn trim_readable(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c.is_control())
}

#[must_use]
pub fn trimmed_non_empty_from<'a>(input: impl Into<Cow<'a, str>>) -> Option<Cow<'a, str>> {
    match input.into() {
        Cow::Borrowed(borrowed) => {
            let trimmed = trim_readable(borrowed);
            (!trimmed.is_empty()).then_some(Cow::Borrowed(trimmed))
        }
        Cow::Owned(owned) => {
            let trimmed = trim_readable(&owned);
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() == owned.len() {
                Some(Cow::Owned(owned))
            } else {
                Some(Cow::Owned(trimmed.to_owned()))
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
