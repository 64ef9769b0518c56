// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The unified tag schema
//!
//! Modeled after Vorbis comments: an ordered list of key/value
//! pairs with case-insensitive keys that may occur multiple times.
//! Keys are stored upper-case.

pub const TITLE_KEY: &str = "TITLE";
pub const ARTIST_KEY: &str = "ARTIST";
pub const ALBUM_KEY: &str = "ALBUM";
pub const TRACK_NUMBER_KEY: &str = "TRACKNUMBER";
pub const COMPOSER_KEY: &str = "COMPOSER";

#[must_use]
pub fn is_title_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(TITLE_KEY)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnifiedTags {
    items: Vec<(String, String)>,
}

impl UnifiedTags {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The first value of the given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(item_key, _)| item_key.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.items
            .iter()
            .filter(move |(item_key, _)| item_key.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All key/value pairs in insertion order
    pub fn items(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.items
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Append a value without touching existing values of the same key.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.items.push((key.to_ascii_uppercase(), value.into()));
    }

    /// Replace all values of the given key with a single value.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.remove(key);
        self.push(key, value);
    }

    /// Replace all values of the given key.
    ///
    /// Removes the key if `values` is empty.
    pub fn replace_all<V>(&mut self, key: &str, values: impl IntoIterator<Item = V>)
    where
        V: Into<String>,
    {
        self.remove(key);
        for value in values {
            self.push(key, value);
        }
    }

    /// Remove all values of the given key and return the number of removed items.
    pub fn remove(&mut self, key: &str) -> usize {
        let len_before = self.items.len();
        self.items
            .retain(|(item_key, _)| !item_key.eq_ignore_ascii_case(key));
        len_before - self.items.len()
    }
}

impl<K, V> FromIterator<(K, V)> for UnifiedTags
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tags = Self::new();
        for (key, value) in iter {
            tags.push(key.as_ref(), value);
        }
        tags
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
