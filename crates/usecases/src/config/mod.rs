// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use anyhow::anyhow;
use semval::prelude::*;

use modtracks_core::{ModName, SourceAsset};
use modtracks_media_file::fs::output_file_path;

use crate::{InputError, InputResult};

/// Appended to the file stem of all output files
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-smmm-copy";

/// The version of this application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub mod_name: ModName,

    /// The directory of the output files
    ///
    /// Output files are placed next to their source files if `None`.
    pub output_dir: Option<PathBuf>,

    pub output_suffix: String,
}

impl PipelineConfig {
    #[must_use]
    pub fn new(mod_name: ModName) -> Self {
        Self {
            mod_name,
            output_dir: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_owned(),
        }
    }

    /// Check the configuration before starting a run.
    pub fn check(&self) -> InputResult<()> {
        self.validate().map_err(|invalidity| {
            InputError(anyhow!("invalid pipeline configuration: {invalidity:?}"))
        })
    }

    #[must_use]
    pub fn output_path_for(&self, asset: &SourceAsset) -> PathBuf {
        let output_dir = self
            .output_dir
            .as_deref()
            .or_else(|| asset.path.parent())
            .unwrap_or_else(|| Path::new("."));
        output_file_path(asset, output_dir, &self.output_suffix)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PipelineConfigInvalidity {
    ModName(modtracks_core::track::title::ModNameInvalidity),

    /// Output files would overwrite their source files
    OutputSuffixEmpty,

    OutputSuffixContainsPathSeparator,
}

impl Validate for PipelineConfig {
    type Invalidity = PipelineConfigInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            mod_name,
            output_dir: _,
            output_suffix,
        } = self;
        ValidationContext::new()
            .validate_with(mod_name, Self::Invalidity::ModName)
            .invalidate_if(
                output_suffix.is_empty(),
                Self::Invalidity::OutputSuffixEmpty,
            )
            .invalidate_if(
                output_suffix.contains(['/', MAIN_SEPARATOR]),
                Self::Invalidity::OutputSuffixContainsPathSeparator,
            )
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
