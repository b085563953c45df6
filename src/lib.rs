//! dnd_roster - build role-playing characters and keep them in JSON rosters
//!
//! The heavy lifting lives in the workspace crates:
//! - `hero`: classes, stats, inventory and the character builder
//! - `items`: the item value type
//! - `save`: the JSON roster store
//! - `error`: roster errors and their user-facing messages
//!
//! This crate adds the prompt-facing glue used by the binary.

pub mod config;
pub mod prompts;
pub mod session;

use std::path::Path;

use error::RosterError;
use hero::{Character, ToRecord};
use save::{CharacterStore, SaveReport};

pub use prompts::{ItemDraft, build_from_prompts};

/// Save `characters` to `path`, relative to the working directory.
pub fn save_all<C: ToRecord>(
    characters: &[C],
    path: impl AsRef<Path>,
) -> Result<SaveReport, RosterError> {
    CharacterStore::default().save(characters, path)
}

/// Load every character stored at `path`.
pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Character>, RosterError> {
    CharacterStore::default().load(path)
}
