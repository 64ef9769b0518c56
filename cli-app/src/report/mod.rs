// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io, path::Path};

use serde::Serialize;

use modtracks::{
    core::{ModName, UnifiedTrack},
    usecases::{
        config::VERSION,
        pipeline::{Outcome, SkippedAsset, SourceWithIssues},
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackEntry<'a> {
    pub(crate) position: usize,
    pub(crate) track_number: Option<u32>,
    pub(crate) title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) artist: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) album: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) composer: Option<&'a str>,
    pub(crate) source_path: &'a Path,
    pub(crate) output_path: &'a Path,
    /// The output file has been produced by the transcoding engine
    pub(crate) converted: bool,
}

impl<'a> TrackEntry<'a> {
    fn new(position: usize, track: &'a UnifiedTrack) -> Self {
        Self {
            position,
            track_number: track.track_number.map(|number| number.get()),
            title: &track.title,
            artist: track.artist.as_deref(),
            album: track.album.as_deref(),
            composer: track.composer.as_deref(),
            source_path: &track.source.path,
            output_path: &track.output_path,
            converted: track.source.format.needs_transcoding(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssuesEntry<'a> {
    pub(crate) path: &'a Path,
    pub(crate) messages: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SkippedEntry<'a> {
    pub(crate) path: &'a Path,
    pub(crate) error: &'a str,
}

/// The ordered playlist, as handed over for deployment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistReport<'a> {
    pub(crate) version: &'static str,
    pub(crate) mod_name: &'a str,
    pub(crate) tracks: Vec<TrackEntry<'a>>,
    pub(crate) issues: Vec<IssuesEntry<'a>>,
    pub(crate) skipped: Vec<SkippedEntry<'a>>,
}

impl<'a> PlaylistReport<'a> {
    pub(crate) fn new(mod_name: &'a ModName, outcome: &'a Outcome) -> Self {
        let Outcome {
            playlist,
            summary: _,
            sources_with_issues,
            skipped_assets,
        } = outcome;
        let tracks = playlist
            .iter()
            .enumerate()
            .map(|(index, track)| TrackEntry::new(index + 1, track))
            .collect();
        let issues = sources_with_issues
            .iter()
            .map(|SourceWithIssues { path, messages }| IssuesEntry { path, messages })
            .collect();
        let skipped = skipped_assets
            .iter()
            .map(|SkippedAsset { path, error, .. }| SkippedEntry { path, error })
            .collect();
        Self {
            version: VERSION,
            mod_name: mod_name.as_str(),
            tracks,
            issues,
            skipped,
        }
    }

    pub(crate) fn write_text(&self, writer: &mut impl io::Write) -> io::Result<()> {
        let Self {
            version: _,
            mod_name,
            tracks,
            issues,
            skipped,
        } = self;
        writeln!(
            writer,
            "Playlist of {mod_name} ({count} track(s)):",
            count = tracks.len()
        )?;
        for track in tracks {
            let number = track
                .track_number
                .map_or_else(|| "?".to_owned(), |number| number.to_string());
            writeln!(
                writer,
                "{position:>3}. [{number:>3}] {title} -> {output}",
                position = track.position,
                title = track.title,
                output = track.output_path.display()
            )?;
        }
        if !issues.is_empty() {
            writeln!(writer, "Issues:")?;
            for IssuesEntry { path, messages } in issues {
                for message in *messages {
                    writeln!(writer, "  {path}: {message}", path = path.display())?;
                }
            }
        }
        if !skipped.is_empty() {
            writeln!(writer, "Skipped:")?;
            for SkippedEntry { path, error } in skipped {
                writeln!(writer, "  {path}: {error}", path = path.display())?;
            }
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
