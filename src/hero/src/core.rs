// src/hero/core.rs
use std::fmt;

use items::Item;
use thiserror::Error;

use crate::bag::Inventory;
use crate::class::Class;
use crate::record::{CharacterRecord, ToRecord};
use crate::stats::{StatBlock, StatCode};

/// Name given to characters built without one.
pub const UNNAMED: &str = "Unnamed";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroError {
    #[error("unsupported class: {0}")]
    UnsupportedClass(String),
    #[error("no class was set before build")]
    ClassNotSet,
    #[error("stat block is missing {0}")]
    IncompleteStats(StatCode),
}

/// A built character.
///
/// Name, class and stats are fixed once built; only the inventory can be
/// changed afterwards, through [`Character::add_item`] and
/// [`Character::remove_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    name: String,
    class: Class,
    stats: StatBlock,
    inventory: Inventory,
}

impl Character {
    /// Create a character with the class defaults: default stat block and
    /// starting kit.
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        Self {
            name: name.into(),
            class,
            stats: class.default_stats(),
            inventory: class.starting_kit().into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn special_ability(&self) -> &'static str {
        self.class.special_ability()
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
    }

    /// Remove the first item equal to `item`; returns it if one was found.
    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        self.inventory.remove(item)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn merge_stats(&mut self, overrides: Vec<(StatCode, i32)>) {
        self.stats.merge(overrides);
    }

    pub(crate) fn replace_inventory(&mut self, items: Vec<Item>) {
        self.inventory.replace(items);
    }
}

impl ToRecord for Character {
    fn to_record(&self) -> Result<CharacterRecord, HeroError> {
        if let Some(code) = self.stats.missing() {
            return Err(HeroError::IncompleteStats(code));
        }
        Ok(CharacterRecord {
            name: self.name.clone(),
            character_class: self.class,
            stats: self.stats.clone(),
            inventory: self.inventory.as_slice().to_vec(),
        })
    }

    fn record_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inventory.iter().map(|item| item.name.as_str()).collect();
        write!(
            f,
            "{} the {} - Stats: {}. Inventory: {}",
            self.name,
            self.class,
            self.stats,
            names.join(", ")
        )
    }
}
