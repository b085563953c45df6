// src/hero/src/record.rs

use items::Item;
use serde::{Deserialize, Serialize};

use crate::class::Class;
use crate::core::HeroError;
use crate::stats::StatBlock;

/// Canonical persisted form of a character.
///
/// Field names are the on-disk JSON keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub character_class: Class,
    pub stats: StatBlock,
    pub inventory: Vec<Item>,
}

/// Conversion into the persisted form.
///
/// Failing conversions are reported per record by the store, which keeps
/// saving the rest.
pub trait ToRecord {
    fn to_record(&self) -> Result<CharacterRecord, HeroError>;

    /// Name used when reporting a record that failed to convert.
    fn record_name(&self) -> &str;
}

impl<T: ToRecord + ?Sized> ToRecord for &T {
    fn to_record(&self) -> Result<CharacterRecord, HeroError> {
        (**self).to_record()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}
