// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn config() -> PipelineConfig {
    PipelineConfig::new(ModName::new("My Mod").unwrap())
}

#[test]
fn default_config_is_valid() {
    let config = config();
    assert_eq!(DEFAULT_OUTPUT_SUFFIX, config.output_suffix);
    assert!(config.is_valid());
    assert!(config.check().is_ok());
}

#[test]
fn empty_output_suffix_is_invalid() {
    let mut config = config();
    config.output_suffix = String::new();
    assert!(!config.is_valid());
    assert!(config.check().is_err());
}

#[test]
fn output_suffix_with_path_separator_is_invalid() {
    let mut config = config();
    config.output_suffix = "/copy".to_owned();
    assert!(!config.is_valid());
}

#[test]
fn output_files_are_placed_next_to_source_files() {
    let config = config();
    let asset = SourceAsset::detect("/music/song.mp3", 0);
    assert_eq!(
        Path::new("/music/song-smmm-copy.ogg"),
        config.output_path_for(&asset)
    );
}

#[test]
fn output_files_are_placed_into_output_dir() {
    let mut config = config();
    config.output_dir = Some(PathBuf::from("/out"));
    config.output_suffix = "-copy".to_owned();
    let asset = SourceAsset::detect("/music/song.flac", 0);
    assert_eq!(
        Path::new("/out/song-copy.ogg"),
        config.output_path_for(&asset)
    );
}
