// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    id3::v2::Id3v2Tag,
    mp4::{Atom, AtomData, AtomIdent, Ilst},
    ogg::VorbisComments,
    tag::Accessor as _,
};

use crate::io::store::MemoryTagStore;

use super::*;

fn mod_name() -> ModName {
    ModName::new("My Mod").unwrap()
}

fn vorbis_comments(items: &[(&str, &str)]) -> VorbisComments {
    let mut comments = VorbisComments::default();
    for (key, value) in items {
        comments.push((*key).to_owned(), (*value).to_owned());
    }
    comments
}

#[test]
fn id3v2_title_is_suffixed() {
    let mut tag = Id3v2Tag::default();
    tag.set_title("Song".into());
    tag.set_artist("Artist".into());
    tag.set_track(3);
    let mut tags = UnifiedTags::new();

    let fields = apply_unified_tags(&tag, "01 song", &mod_name(), &mut tags);

    assert_eq!("Song - My Mod", fields.title);
    assert_eq!(TitleSource::Tag, fields.title_source);
    assert_eq!(Some("Artist"), fields.artist.as_deref());
    assert!(fields.album.is_none());
    assert!(fields.composer.is_none());
    assert_eq!(Some("Song - My Mod"), tags.get(TITLE_KEY));
    assert_eq!(Some("Artist"), tags.get(ARTIST_KEY));
    assert_eq!(Some("3"), tags.get(TRACK_NUMBER_KEY));
    assert!(!tags.contains_key(ALBUM_KEY));
    assert!(!tags.contains_key(COMPOSER_KEY));
}

#[test]
fn flac_without_title_uses_file_name() {
    let comments = vorbis_comments(&[("artist", "Artist")]);
    let mut tags = UnifiedTags::new();

    let fields = apply_unified_tags(&comments, "02 Interlude", &mod_name(), &mut tags);

    assert_eq!("02 Interlude - My Mod", fields.title);
    assert_eq!(TitleSource::FileName, fields.title_source);
    assert_eq!(Some("02 Interlude - My Mod"), tags.get(TITLE_KEY));
    assert_eq!(1, tags.get_all(TITLE_KEY).count());
}

#[test]
fn blank_title_uses_file_name() {
    let comments = vorbis_comments(&[("title", "  ")]);
    let mut tags = UnifiedTags::new();

    let fields = apply_unified_tags(&comments, "track", &mod_name(), &mut tags);

    assert_eq!("track - My Mod", fields.title);
    assert_eq!(TitleSource::FileName, fields.title_source);
}

#[test]
fn vorbis_passthrough_keys_are_upcased() {
    let comments = vorbis_comments(&[
        ("title", "Song"),
        ("genre", "Ambient"),
        ("Genre", "Drone"),
        ("replaygain_track_gain", "-6.5 dB"),
    ]);
    let mut tags = UnifiedTags::new();

    apply_unified_tags(&comments, "song", &mod_name(), &mut tags);

    assert_eq!(
        vec!["Ambient", "Drone"],
        tags.get_all("GENRE").collect::<Vec<_>>()
    );
    assert!(
        tags.items()
            .any(|(key, value)| key == "REPLAYGAIN_TRACK_GAIN" && value == "-6.5 dB")
    );
    assert!(tags.items().all(|(key, _)| key.to_ascii_uppercase() == key));
    assert_eq!(vec!["Song - My Mod"], tags.get_all(TITLE_KEY).collect::<Vec<_>>());
}

#[test]
fn title_is_written_after_passthrough() {
    let mut tags = UnifiedTags::new();
    let comments = vorbis_comments(&[("TITLE", "Song"), ("title", "Other")]);

    apply_unified_tags(&comments, "song", &mod_name(), &mut tags);

    assert_eq!(vec!["Song - My Mod"], tags.get_all(TITLE_KEY).collect::<Vec<_>>());
    let (last_key, _) = tags.items().last().unwrap();
    assert_eq!(TITLE_KEY, last_key);
}

#[test]
fn renormalization_keeps_previous_passthrough_keys() {
    let mut tags: UnifiedTags = [
        (TITLE_KEY, "Song - My Mod"),
        ("GENRE", "Ambient"),
        ("COMMENT", "keep me"),
        (TRACK_NUMBER_KEY, "4"),
    ]
    .into_iter()
    .collect();
    let comments = vorbis_comments(&[("title", "Song"), ("genre", "Drone")]);

    apply_unified_tags(&comments, "song", &mod_name(), &mut tags);

    assert_eq!(Some("keep me"), tags.get("COMMENT"));
    assert_eq!(Some("4"), tags.get(TRACK_NUMBER_KEY));
    assert_eq!(vec!["Drone"], tags.get_all("GENRE").collect::<Vec<_>>());
}

#[test]
fn mp4_fields_are_mapped() {
    let mut ilst = Ilst::default();
    ilst.set_title("Song".into());
    ilst.set_album("Album".into());
    ilst.set_track(9);
    ilst.insert(Atom::new(
        AtomIdent::Fourcc(*b"\xa9wrt"),
        AtomData::UTF8("Composer".into()),
    ));
    let mut tags = UnifiedTags::new();

    let fields = apply_unified_tags(&ilst, "song", &mod_name(), &mut tags);

    assert_eq!("Song - My Mod", fields.title);
    assert_eq!(Some("Album"), tags.get(ALBUM_KEY));
    assert_eq!(Some("Composer"), tags.get(COMPOSER_KEY));
    assert_eq!(Some("9"), tags.get(TRACK_NUMBER_KEY));
    assert!(!tags.contains_key(ARTIST_KEY));
}

#[test]
fn missing_header_keeps_existing_fields() {
    let mut tags: UnifiedTags = [(ARTIST_KEY, "Artist")].into_iter().collect();

    let fields = apply_unified_tags(
        &SourceTags::MissingHeader,
        "03 Outro",
        &mod_name(),
        &mut tags,
    );

    assert_eq!("03 Outro - My Mod", fields.title);
    assert!(fields.artist.is_none());
    assert_eq!(Some("Artist"), tags.get(ARTIST_KEY));
}

#[test]
fn every_title_ends_with_suffix() {
    let mut id3v2 = Id3v2Tag::default();
    id3v2.set_title("Song".into());
    let mut ilst = Ilst::default();
    ilst.set_title("Song".into());
    let adapters: [&dyn TagAdapter; 6] = [
        &id3v2,
        &Id3v2Tag::default(),
        &ilst,
        &vorbis_comments(&[("title", "Song")]),
        &SourceTags::MissingHeader,
        &SourceTags::Unsupported,
    ];
    for mod_name in ["x", "My Mod", "Mod - With Dash"] {
        let mod_name = ModName::new(mod_name).unwrap();
        for adapter in adapters {
            let mut tags = UnifiedTags::new();
            let fields = apply_unified_tags(adapter, "stem", &mod_name, &mut tags);
            assert!(fields.title.ends_with(&format!(" - {mod_name}")));
        }
    }
}

#[test]
fn normalize_unsupported_asset_copies_without_tags() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("song.aiff");
    std::fs::write(&source_path, b"FORM....AIFF").unwrap();
    let output_path = dir.path().join("song-copy.aiff");
    let asset = SourceAsset::detect(&source_path, 0);
    let store = MemoryTagStore::new();

    let normalized = normalize_asset(&asset, &output_path, &mod_name(), &store).unwrap();

    assert!(normalized.output_created);
    assert!(!normalized.tags_written);
    assert_eq!(1, normalized.issues.len());
    assert_eq!("song - My Mod", normalized.track.title);
    assert!(normalized.track.track_number.is_none());
    assert!(output_path.is_file());
    assert!(!store.contains(&output_path));
}

#[test]
fn normalize_unreadable_asset_uses_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("05 Theme.mp3");
    std::fs::write(&source_path, b"not an mpeg stream").unwrap();
    let output_path = dir.path().join("05 Theme-copy.ogg");
    let asset = SourceAsset::detect(&source_path, 4);
    let store = MemoryTagStore::new();

    let normalized = normalize_asset(&asset, &output_path, &mod_name(), &store).unwrap();

    assert!(normalized.output_created);
    assert!(normalized.tags_written);
    assert!(!normalized.issues.is_empty());
    assert_eq!("05 Theme - My Mod", normalized.track.title);
    assert_eq!(4, normalized.track.discovery_index());
    assert_eq!(output_path, normalized.track.output_path);
    let tags = store.tags(&output_path).unwrap();
    assert_eq!(Some("05 Theme - My Mod"), tags.get(TITLE_KEY));
}
