// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Removes all registered output files when dropped, unless kept.
///
/// Guarantees that an aborted run does not leave any intermediate
/// files behind.
#[derive(Debug)]
pub struct OutputFilesGuard {
    paths: Vec<PathBuf>,
    armed: bool,
}

fn remove_output_file(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {
            log::info!("Removed output file {path}", path = path.display());
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("Output file {path} has already been removed", path = path.display());
        }
        Err(err) => {
            log::error!("Failed to remove output file {path}: {err}", path = path.display());
        }
    }
}

impl OutputFilesGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: Vec::new(),
            armed: true,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn register(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug_assert!(!self.paths.contains(&path));
        self.paths.push(path);
    }

    /// Remove a single output file immediately.
    ///
    /// Returns `false` if the file has not been registered and
    /// was not touched.
    pub fn discard(&mut self, path: &Path) -> bool {
        let Some(index) = self.paths.iter().position(|registered| registered == path) else {
            return false;
        };
        let path = self.paths.remove(index);
        remove_output_file(&path);
        true
    }

    /// Disarm the guard and return the registered paths.
    #[must_use]
    pub fn keep(mut self) -> Vec<PathBuf> {
        self.armed = false;
        std::mem::take(&mut self.paths)
    }
}

impl Default for OutputFilesGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OutputFilesGuard {
    fn drop(&mut self) {
        if !self.armed || self.paths.is_empty() {
            return;
        }
        log::warn!(
            "Cleaning up {count} output file(s) of an aborted run",
            count = self.paths.len()
        );
        for path in self.paths.drain(..).rev() {
            remove_output_file(&path);
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
