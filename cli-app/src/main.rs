// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use log::LevelFilter;

use modtracks::{
    core::ModName,
    media_file::{
        fs::visit::discover_source_assets,
        io::{
            resolve::{ConsolePrompt, DeclinePrompt, TrackNumberPrompt},
            store::OggVorbisTagStore,
        },
        transcode::FfmpegTranscoder,
    },
    usecases::{
        config::{DEFAULT_OUTPUT_SUFFIX, PipelineConfig, VERSION},
        pipeline::{Context, process_source_assets},
    },
};

mod report;
use self::report::PlaylistReport;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

/// Convert audio files into Ogg Vorbis files with unified tags and
/// print them as an ordered playlist.
#[derive(Debug, Parser)]
#[command(name = "modtracks", version, about, long_about = None)]
struct Args {
    /// Directory that contains the audio files
    music_dir: PathBuf,

    /// Name of the mod, appended to all titles
    #[arg(long, env = "MODTRACKS_MOD_NAME")]
    mod_name: String,

    /// Directory for the output files [default: next to the source files]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Appended to the file name of all output files
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    output_suffix: String,

    /// Path of the ffmpeg executable
    #[arg(long, env = "FFMPEG_PATH")]
    ffmpeg: Option<PathBuf>,

    /// Never ask for missing track numbers
    #[arg(long)]
    no_prompt: bool,

    /// Print the playlist as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args {
        music_dir,
        mod_name,
        output_dir,
        output_suffix,
        ffmpeg,
        no_prompt,
        json,
    } = args;
    let mod_name = ModName::new(mod_name).context("mod name")?;
    let config = PipelineConfig {
        mod_name,
        output_dir,
        output_suffix,
    };
    config.check()?;
    log::info!("modtracks v{VERSION}: {config:?}");

    let assets = discover_source_assets(&music_dir, &config.output_suffix)
        .with_context(|| format!("discovering audio files in {}", music_dir.display()))?;
    let needs_transcoding = assets
        .iter()
        .any(|asset| asset.format.needs_transcoding());
    let transcoder = match FfmpegTranscoder::locate(ffmpeg.as_deref()) {
        Ok(transcoder) => transcoder,
        Err(err) if !needs_transcoding => {
            log::debug!("Transcoding engine is not needed: {err}");
            FfmpegTranscoder::new(PathBuf::from("ffmpeg"))
        }
        Err(err) => return Err(err).context("transcoding engine"),
    };
    let mut prompt: Box<dyn TrackNumberPrompt> = if no_prompt {
        Box::new(DeclinePrompt)
    } else {
        Box::new(ConsolePrompt::stdio())
    };
    let mut context = Context {
        transcoder: &transcoder,
        store: &OggVorbisTagStore,
        prompt: prompt.as_mut(),
    };
    let outcome = process_source_assets(&assets, &config, &mut context, &mut |event| {
        log::debug!("{event:?}");
    })?;

    let report = PlaylistReport::new(&config.mod_name, &outcome);
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
