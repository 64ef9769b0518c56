// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn new_track(title: &str) -> UnifiedTrack {
    UnifiedTrack {
        source: SourceAsset::detect("/music/track.mp3", 0),
        output_path: "/music/track-smmm-copy.ogg".into(),
        title: title.to_owned(),
        artist: None,
        album: None,
        composer: None,
        track_number: None,
    }
}

#[test]
fn validate_title_suffix() {
    let mod_name = ModName::new("Stellar").unwrap();
    let track = new_track("Nebula - Stellar");
    assert!(WithModName {
        track: &track,
        mod_name: &mod_name
    }
    .is_valid());
    let track = new_track("Nebula");
    assert!(!WithModName {
        track: &track,
        mod_name: &mod_name
    }
    .is_valid());
}

#[test]
fn missing_track_number_is_unknown_ordinal() {
    let mut track = new_track("Nebula - Stellar");
    assert_eq!(TrackOrdinal::Unknown, track.ordinal());
    track.track_number = TrackNumber::new(2);
    assert_eq!(TrackOrdinal::Number(TrackNumber::new(2).unwrap()), track.ordinal());
}
