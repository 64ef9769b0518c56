// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sequential pipeline from source files to an ordered playlist
//!
//! Each asset passes through all stages up to the resolution of its
//! track number before the next asset is processed. Ordering starts
//! after all assets have been processed.

use std::{
    fmt,
    path::{Path, PathBuf},
    result::Result as StdResult,
    time::{Duration, Instant},
};

use modtracks_core::{
    OrderedPlaylist, SourceAsset, UnifiedTrack, prelude::*, track::WithModName,
};
use modtracks_media_file::{
    fmt::read_source_tags,
    fs::{ensure_output_file, visit::discover_source_assets},
    io::{
        Issues,
        normalize::{Normalized, normalize_source_tags},
        resolve::{TrackNumberPrompt, TrackNumberResolution, resolve_track_number},
        store::UnifiedTagStore,
    },
    transcode::Transcoder,
};

use crate::{Error, Result, cleanup::OutputFilesGuard, config::PipelineConfig};

/// The state of an asset
///
/// Transitions are strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Discovered,
    FormatDetected,
    MetadataExtracted,
    Normalized,
    TrackNumberResolved,
    Ordered,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub discovered: usize,

    /// Converted by the transcoding engine
    pub converted: usize,

    /// Copied byte by byte
    pub copied: usize,

    pub normalized: usize,

    /// Track number read from the unified tags
    pub tagged: usize,

    /// Track number entered manually
    pub recovered: usize,

    /// Track number unknown
    pub unknown: usize,

    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub elapsed: Duration,

    /// The asset that has reached the stage, if any
    pub path: Option<PathBuf>,

    pub stage: Stage,

    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWithIssues {
    pub path: PathBuf,
    pub messages: Vec<String>,
}

/// An asset that has been excluded from the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAsset {
    pub path: PathBuf,
    pub stage: Stage,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub playlist: OrderedPlaylist,
    pub summary: Summary,
    pub sources_with_issues: Vec<SourceWithIssues>,
    pub skipped_assets: Vec<SkippedAsset>,
}

/// The external collaborators of a run
pub struct Context<'a> {
    pub transcoder: &'a dyn Transcoder,
    pub store: &'a dyn UnifiedTagStore,
    pub prompt: &'a mut dyn TrackNumberPrompt,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

struct Progress<'a, ReportProgressFn> {
    started_at: Instant,
    summary: Summary,
    report_progress_fn: &'a mut ReportProgressFn,
}

impl<ReportProgressFn> Progress<'_, ReportProgressFn>
where
    ReportProgressFn: FnMut(ProgressEvent),
{
    fn report(&mut self, path: Option<&Path>, stage: Stage) {
        (self.report_progress_fn)(ProgressEvent {
            elapsed: self.started_at.elapsed(),
            path: path.map(ToOwned::to_owned),
            stage,
            summary: self.summary.clone(),
        });
    }
}

/// Discover all source assets in a directory and process them.
pub fn run<ReportProgressFn: FnMut(ProgressEvent)>(
    music_dir: &Path,
    config: &PipelineConfig,
    context: &mut Context<'_>,
    report_progress_fn: &mut ReportProgressFn,
) -> Result<Outcome> {
    let assets = discover_source_assets(music_dir, &config.output_suffix)?;
    log::info!(
        "Discovered {count} audio file(s) in {dir}",
        count = assets.len(),
        dir = music_dir.display()
    );
    process_source_assets(&assets, config, context, report_progress_fn)
}

struct ProcessedAsset {
    track: UnifiedTrack,
    issues: Issues,
}

/// Errors that only exclude a single asset from the playlist.
enum AssetError {
    Skip { stage: Stage, error: Error },
    Abort(Error),
}

fn process_source_asset<ReportProgressFn: FnMut(ProgressEvent)>(
    asset: &SourceAsset,
    config: &PipelineConfig,
    context: &mut Context<'_>,
    guard: &mut OutputFilesGuard,
    progress: &mut Progress<'_, ReportProgressFn>,
) -> StdResult<ProcessedAsset, AssetError> {
    let output_path = config.output_path_for(asset);
    progress.report(Some(&asset.path), Stage::FormatDetected);

    if asset.format.needs_transcoding() {
        // The engine might leave a partially written file on failure
        if !output_path.exists() {
            guard.register(&output_path);
        }
        let converted_path = context
            .transcoder
            .convert(&asset.path, asset.format, &output_path)
            .map_err(|err| AssetError::Abort(err.into()))?;
        debug_assert_eq!(output_path, converted_path);
        progress.summary.converted += 1;
    } else {
        let created = ensure_output_file(&asset.path, &output_path).map_err(|err| {
            AssetError::Skip {
                stage: Stage::FormatDetected,
                error: err.into(),
            }
        })?;
        if created {
            guard.register(&output_path);
        }
        progress.summary.copied += 1;
    }

    let mut issues = Issues::new();
    let source_tags = read_source_tags(asset, &mut issues);
    progress.report(Some(&asset.path), Stage::MetadataExtracted);

    let Normalized {
        mut track,
        output_created,
        tags_written: _,
        issues,
    } = normalize_source_tags(
        asset,
        &source_tags,
        issues,
        &output_path,
        &config.mod_name,
        context.store,
    )
    .map_err(|err| AssetError::Skip {
        stage: Stage::MetadataExtracted,
        error: err.into(),
    })?;
    debug_assert!(!output_created);
    debug_assert!(
        WithModName {
            track: &track,
            mod_name: &config.mod_name,
        }
        .is_valid()
    );
    progress.summary.normalized += 1;
    progress.report(Some(&asset.path), Stage::Normalized);

    let resolution = resolve_track_number(context.store, context.prompt, &output_path);
    match resolution {
        TrackNumberResolution::Tagged(_) => progress.summary.tagged += 1,
        TrackNumberResolution::Recovered(_) => progress.summary.recovered += 1,
        TrackNumberResolution::Declined | TrackNumberResolution::Failed => {
            progress.summary.unknown += 1;
        }
    }
    track.track_number = resolution.track_number();
    progress.report(Some(&asset.path), Stage::TrackNumberResolved);

    Ok(ProcessedAsset { track, issues })
}

/// Process the given source assets one after another and order them.
///
/// A failing transcoding engine aborts the whole run. All output files
/// that have been created until then are removed. Other failures only
/// exclude the affected asset.
pub fn process_source_assets<ReportProgressFn: FnMut(ProgressEvent)>(
    assets: &[SourceAsset],
    config: &PipelineConfig,
    context: &mut Context<'_>,
    report_progress_fn: &mut ReportProgressFn,
) -> Result<Outcome> {
    config.check()?;
    let mut progress = Progress {
        started_at: Instant::now(),
        summary: Summary {
            discovered: assets.len(),
            ..Default::default()
        },
        report_progress_fn,
    };
    progress.report(None, Stage::Discovered);
    if !assets.is_empty() && assets.iter().all(|asset| !asset.format.needs_transcoding()) {
        log::info!("No conversion needed");
    }

    let mut guard = OutputFilesGuard::new();
    let mut tracks = Vec::with_capacity(assets.len());
    let mut sources_with_issues = Vec::new();
    let mut skipped_assets = Vec::new();
    for asset in assets {
        match process_source_asset(asset, config, context, &mut guard, &mut progress) {
            Ok(ProcessedAsset { track, issues }) => {
                if !issues.is_empty() {
                    sources_with_issues.push(SourceWithIssues {
                        path: asset.path.clone(),
                        messages: issues.into_messages(),
                    });
                }
                tracks.push(track);
            }
            Err(AssetError::Skip { stage, error }) => {
                log::warn!("Skipping {path}: {error}", path = asset.path.display());
                guard.discard(&config.output_path_for(asset));
                progress.summary.skipped += 1;
                skipped_assets.push(SkippedAsset {
                    path: asset.path.clone(),
                    stage,
                    error: error.to_string(),
                });
            }
            Err(AssetError::Abort(error)) => {
                log::error!(
                    "Aborting after failure on {path}: {error}",
                    path = asset.path.display()
                );
                // The guard removes all output files of this run
                return Err(error);
            }
        }
    }

    let playlist = OrderedPlaylist::new(tracks);
    progress.report(None, Stage::Ordered);
    let kept_files = guard.keep();
    log::debug!("Keeping {count} new output file(s)", count = kept_files.len());
    log::info!("Finished: {summary:?}", summary = progress.summary);

    let Progress { summary, .. } = progress;
    Ok(Outcome {
        playlist,
        summary,
        sources_with_issues,
        skipped_assets,
    })
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
