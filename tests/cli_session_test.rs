use dnd_roster::config::{Arguments, Mode};
use dnd_roster::session::Session;
use hero::{Class, StatCode};
use items::Item;
use save::CharacterStore;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;

fn run_session(store: &CharacterStore, arguments: &Arguments, script: &str) -> (anyhow::Result<()>, String) {
    let mut output = Vec::new();
    let result = {
        let mut session = Session::new(Cursor::new(script.to_string()), &mut output, store.clone(), arguments);
        session.run()
    };
    (result, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_build_session_retries_and_saves() {
    let temp_dir = tempdir().expect("temp dir");
    let store = CharacterStore::new(temp_dir.path());
    let arguments = Arguments::default();

    let script = [
        "build",
        "Grog",
        "artificer", // rejected
        "barbarian",
        "18",  // STR
        "abc", // rejected
        "",    // DEX skipped
        "",    // CON
        "",    // INT
        "",    // WIS
        "",    // CHA
        "y",
        "Handaxe",
        "Throwable",
        "lots", // rejected
        "5",
        "n",
        "n",
        "party",
    ]
    .join("\n")
        + "\n";

    let (result, output) = run_session(&store, &arguments, &script);
    result.expect("session completes");
    assert!(output.contains("Invalid class choice!"));
    assert!(output.contains("Invalid input! Please enter a positive whole number."));
    assert!(output.contains("Saved 1 character(s) to party.json"));

    let loaded = store.load("party.json").expect("saved roster");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name(), "Grog");
    assert_eq!(loaded[0].class(), Class::Barbarian);
    assert_eq!(loaded[0].stats().get(StatCode::Str), Some(18));
    assert_eq!(loaded[0].stats().get(StatCode::Dex), Some(12));
    assert_eq!(loaded[0].inventory().as_slice(), &[Item::new("Handaxe", "Throwable", 5)]);
}

#[test]
fn test_build_session_uses_default_file() {
    let temp_dir = tempdir().expect("temp dir");
    let store = CharacterStore::new(temp_dir.path());
    let arguments = Arguments {
        file: PathBuf::from("weekend.json"),
        mode: Some(Mode::Build),
        ..Arguments::default()
    };

    let script = "Pike\ncleric\n\n\n\n\n\n\nn\nn\n\n";
    let (result, output) = run_session(&store, &arguments, script);
    result.expect("session completes");
    assert!(!output.contains("[load]"));

    let loaded = store.load("weekend.json").expect("saved roster");
    assert_eq!(loaded[0].stats(), &Class::Cleric.default_stats());
    assert!(loaded[0].inventory().is_empty());
}

#[test]
fn test_load_session_lists_characters() {
    let temp_dir = tempdir().expect("temp dir");
    let store = CharacterStore::new(temp_dir.path());
    store
        .save(&[hero::Character::new("Keyleth", Class::Druid)], "circle.json")
        .expect("seed roster");

    let (result, output) = run_session(&store, &Arguments::default(), "nope\nload\ncircle\n");
    result.expect("session completes");
    assert!(output.contains("Invalid choice. Type 'load' or 'build'."));
    assert!(output.contains("Available rosters: circle.json"));
    assert!(output.contains("Loaded 1 character(s):"));
    assert!(output.contains("1. Keyleth the Druid"));
    assert!(output.contains("Wild Shape"));
}

#[test]
fn test_load_session_reports_missing_file() {
    let temp_dir = tempdir().expect("temp dir");
    let store = CharacterStore::new(temp_dir.path());
    let arguments = Arguments {
        mode: Some(Mode::Load),
        ..Arguments::default()
    };

    let (result, output) = run_session(&store, &arguments, "ghosts\n");
    result.expect("session completes");
    assert!(output.contains("not found"));
    assert!(output.contains("ghosts.json"));
}

#[test]
fn test_closed_input_is_an_error() {
    let temp_dir = tempdir().expect("temp dir");
    let store = CharacterStore::new(temp_dir.path());
    let (result, _) = run_session(&store, &Arguments::default(), "build\nGrog\n");
    assert!(result.is_err());
}
