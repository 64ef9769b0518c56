// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn locate_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let ffmpeg_path = dir.path().join("ffmpeg");
    std::fs::write(&ffmpeg_path, b"").unwrap();

    let transcoder = FfmpegTranscoder::locate(Some(&ffmpeg_path)).unwrap();

    assert_eq!(ffmpeg_path, transcoder.ffmpeg_path());
}

#[test]
fn ogg_and_unsupported_files_are_not_converted() {
    let transcoder = FfmpegTranscoder::new(PathBuf::from("/nonexistent/ffmpeg"));
    for format in [SourceFormat::Ogg, SourceFormat::Unsupported] {
        assert!(matches!(
            transcoder.convert(Path::new("in"), format, Path::new("out.ogg")),
            Err(TranscodeError::UnsupportedFormat { .. })
        ));
    }
}

#[test]
fn missing_engine_fails_to_spawn() {
    let dir = tempfile::tempdir().unwrap();
    let transcoder = FfmpegTranscoder::new(dir.path().join("missing-ffmpeg"));

    let result = transcoder.convert(
        &dir.path().join("song.mp3"),
        SourceFormat::Mp3,
        &dir.path().join("song.ogg"),
    );

    assert!(matches!(result, Err(TranscodeError::SpawnFailed(_))));
}
