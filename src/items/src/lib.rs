//src/items/src/lib.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Items priced above this many gold pieces count as valuable.
pub const VALUABLE_THRESHOLD: i64 = 100;

/// Basic item carried in a character's inventory.
///
/// Items have no identity of their own: two items with the same name,
/// description and value are the same item.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    /// Monetary value in gold pieces. Negative values are allowed.
    pub value: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value,
        }
    }

    /// Whether the item is worth more than [`VALUABLE_THRESHOLD`].
    pub fn is_valuable(&self) -> bool {
        self.value > VALUABLE_THRESHOLD
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} gp)", self.name, self.description, self.value)
    }
}
