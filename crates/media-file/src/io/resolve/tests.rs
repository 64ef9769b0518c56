// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::Cursor;

use modtracks_core::{UnifiedTags, tag::TITLE_KEY};

use crate::io::store::MemoryTagStore;

use super::*;

const OUTPUT_PATH: &str = "/out/song-copy.ogg";

fn store_with_tags(items: &[(&str, &str)]) -> MemoryTagStore {
    let store = MemoryTagStore::new();
    store.insert(OUTPUT_PATH, items.iter().copied().collect::<UnifiedTags>());
    store
}

fn scripted_prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
    ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn prompt_output(prompt: ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, output) = prompt.into_inner();
    String::from_utf8(output).unwrap()
}

fn track_number(number: u32) -> TrackNumber {
    TrackNumber::new(number).unwrap()
}

#[test]
fn tagged_track_number_with_total() {
    let store = store_with_tags(&[(TRACK_NUMBER_KEY, "3/12")]);
    let mut prompt = scripted_prompt("");

    let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

    assert_eq!(TrackNumberResolution::Tagged(track_number(3)), resolution);
    assert!(prompt_output(prompt).is_empty());
}

#[test]
fn malformed_track_number_fails_without_prompting() {
    for raw in ["abc", "0", "/12", "-1"] {
        let store = store_with_tags(&[(TRACK_NUMBER_KEY, raw)]);
        let mut prompt = scripted_prompt("y\n5\n");

        let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

        assert_eq!(TrackNumberResolution::Failed, resolution);
        assert_eq!(TrackOrdinal::Unknown, resolution.ordinal());
        assert!(prompt_output(prompt).is_empty());
    }
}

#[test]
fn missing_track_number_is_recovered_and_saved() {
    let store = store_with_tags(&[(TITLE_KEY, "Song - My Mod")]);
    let mut prompt = scripted_prompt("y\n 7 \n");

    let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

    assert_eq!(TrackNumberResolution::Recovered(track_number(7)), resolution);
    let tags = store.tags(Path::new(OUTPUT_PATH)).unwrap();
    assert_eq!(Some("7"), tags.get(TRACK_NUMBER_KEY));
    assert_eq!(Some("Song - My Mod"), tags.get(TITLE_KEY));
    assert!(prompt_output(prompt).contains("(y/N)"));

    // Read back without asking again
    let resolution = resolve_track_number(&store, &mut DeclinePrompt, Path::new(OUTPUT_PATH));
    assert_eq!(TrackNumberResolution::Tagged(track_number(7)), resolution);
}

#[test]
fn declined_manual_entry_is_not_saved() {
    for input in ["n\n", "\n", "", "whatever\n"] {
        let store = store_with_tags(&[]);
        let mut prompt = scripted_prompt(input);

        let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

        assert_eq!(TrackNumberResolution::Declined, resolution);
        assert_eq!(None, resolution.track_number());
        let tags = store.tags(Path::new(OUTPUT_PATH)).unwrap();
        assert!(!tags.contains_key(TRACK_NUMBER_KEY));
    }
}

#[test]
fn invalid_manual_entry_fails_and_is_not_saved() {
    let store = store_with_tags(&[]);
    let mut prompt = scripted_prompt("Y\nseven\n");

    let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

    assert_eq!(TrackNumberResolution::Failed, resolution);
    let tags = store.tags(Path::new(OUTPUT_PATH)).unwrap();
    assert!(!tags.contains_key(TRACK_NUMBER_KEY));
}

#[test]
fn unreadable_output_file_fails_without_prompting() {
    let store = MemoryTagStore::new();
    let mut prompt = scripted_prompt("y\n1\n");

    let resolution = resolve_track_number(&store, &mut prompt, Path::new(OUTPUT_PATH));

    assert_eq!(TrackNumberResolution::Failed, resolution);
    assert!(prompt_output(prompt).is_empty());
}

#[test]
fn decline_prompt_never_recovers() {
    let store = store_with_tags(&[]);

    let resolution = resolve_track_number(&store, &mut DeclinePrompt, Path::new(OUTPUT_PATH));

    assert_eq!(TrackNumberResolution::Declined, resolution);
    assert_eq!(TrackOrdinal::Unknown, resolution.ordinal());
}

#[test]
fn console_prompt_keeps_stdout_free() {
    let (_input, _output): (_, std::io::Stderr) = ConsolePrompt::stdio().into_inner();
}
