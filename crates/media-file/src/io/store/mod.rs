// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Persistence of the unified tag schema in output files

use std::{
    cell::RefCell,
    collections::HashMap,
    fs::File,
    io::{Error as IoError, ErrorKind},
    path::{Path, PathBuf},
};

use lofty::{
    config::WriteOptions,
    file::AudioFile,
    ogg::{VorbisComments, VorbisFile},
    tag::TagExt as _,
};

use modtracks_core::UnifiedTags;

use crate::{Error, Result, fmt::parse_options};

pub trait UnifiedTagStore {
    fn load(&self, path: &Path) -> Result<UnifiedTags>;

    /// Replace all unified tags of the file.
    fn save(&self, path: &Path, tags: &UnifiedTags) -> Result<()>;
}

/// Stores the unified tags as Vorbis comments of an Ogg Vorbis file.
#[derive(Debug, Default, Clone, Copy)]
pub struct OggVorbisTagStore;

fn read_vorbis_comments(path: &Path) -> Result<VorbisComments> {
    let mut file = File::open(path)?;
    let mut vorbis_file = <VorbisFile as AudioFile>::read_from(&mut file, parse_options())?;
    Ok(std::mem::take(vorbis_file.vorbis_comments_mut()))
}

impl UnifiedTagStore for OggVorbisTagStore {
    fn load(&self, path: &Path) -> Result<UnifiedTags> {
        let comments = read_vorbis_comments(path)?;
        Ok(comments.items().collect())
    }

    fn save(&self, path: &Path, tags: &UnifiedTags) -> Result<()> {
        // Replace the items but keep the vendor string and pictures
        let mut comments = read_vorbis_comments(path)?;
        let old_keys = comments
            .items()
            .map(|(key, _)| key.to_owned())
            .collect::<Vec<_>>();
        for key in old_keys {
            let _removed = comments.remove(&key).count();
        }
        for (key, value) in tags.items() {
            comments.push(key.to_owned(), value.to_owned());
        }
        log::debug!(
            "Saving {count} unified tag(s) into {path}",
            count = tags.len(),
            path = path.display()
        );
        comments.save_to_path(path, WriteOptions::default())?;
        Ok(())
    }
}

/// Keeps unified tags in memory instead of writing them into files.
///
/// Loading tags of an unknown path fails like loading tags from
/// a missing file.
#[derive(Debug, Default)]
pub struct MemoryTagStore {
    files: RefCell<HashMap<PathBuf, UnifiedTags>>,
}

impl MemoryTagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with the given tags.
    pub fn insert(&self, path: impl Into<PathBuf>, tags: UnifiedTags) {
        self.files.borrow_mut().insert(path.into(), tags);
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    /// A snapshot of the tags of a file.
    #[must_use]
    pub fn tags(&self, path: &Path) -> Option<UnifiedTags> {
        self.files.borrow().get(path).cloned()
    }
}

impl UnifiedTagStore for MemoryTagStore {
    fn load(&self, path: &Path) -> Result<UnifiedTags> {
        self.tags(path).ok_or_else(|| {
            Error::Io(IoError::new(
                ErrorKind::NotFound,
                format!("no such file: {path}", path = path.display()),
            ))
        })
    }

    fn save(&self, path: &Path, tags: &UnifiedTags) -> Result<()> {
        self.insert(path, tags.clone());
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
