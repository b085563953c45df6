//! Turning raw prompt answers into a [`Character`].
//!
//! The interactive session does the asking and retrying; this module only
//! interprets what it collected.

use hero::{Character, CharacterBuilder, HeroError};
use items::Item;

/// An item the user chose to add, with the value still as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub value: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value: value.into(),
        }
    }

    /// The finished item, or `None` if the value is not a whole number.
    pub fn to_item(&self) -> Option<Item> {
        let value = self.value.trim().parse::<i64>().ok()?;
        Some(Item::new(self.name.trim(), self.description.trim(), value))
    }
}

/// What a single stat answer means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatInput {
    /// Left blank: keep the class default.
    Skip,
    Value(i32),
    /// Not a positive whole number.
    Invalid,
}

pub fn parse_stat_input(raw: &str) -> StatInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return StatInput::Skip;
    }
    match raw.parse::<i32>() {
        Ok(value) if value > 0 && raw.bytes().all(|b| b.is_ascii_digit()) => {
            StatInput::Value(value)
        }
        _ => StatInput::Invalid,
    }
}

/// Trim and capitalize a typed class label (`" wIzArd"` -> `"Wizard"`).
pub fn normalize_class_label(raw: &str) -> String {
    let raw = raw.trim();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build a character from raw prompt answers.
///
/// Blank stat answers keep the class default and invalid ones are ignored.
/// The parsed drafts always become the whole inventory, so answering "no
/// items" leaves it empty. Drafts with a non-numeric value are skipped.
/// Only an unknown class fails the build.
pub fn build_from_prompts<S, K, V>(
    raw_name: &str,
    raw_class: &str,
    raw_stats: S,
    items: &[ItemDraft],
) -> Result<Character, HeroError>
where
    S: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let label = normalize_class_label(raw_class);

    let mut overrides = Vec::new();
    for (code, raw) in raw_stats {
        match parse_stat_input(raw.as_ref()) {
            StatInput::Value(value) => overrides.push((code.as_ref().to_string(), value)),
            StatInput::Skip => {}
            StatInput::Invalid => {
                tracing::warn!(stat = code.as_ref(), input = raw.as_ref(), "ignoring invalid stat input")
            }
        }
    }

    let mut inventory = Vec::with_capacity(items.len());
    for draft in items {
        match draft.to_item() {
            Some(item) => inventory.push(item),
            None => tracing::warn!(item = %draft.name, value = %draft.value, "skipping item with invalid value"),
        }
    }

    CharacterBuilder::new()
        .set_name(raw_name.trim())
        .set_class(&label)?
        .set_stats(overrides)
        .set_inventory(inventory)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::{Class, StatCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn stat_inputs() {
        assert_eq!(parse_stat_input(""), StatInput::Skip);
        assert_eq!(parse_stat_input("  "), StatInput::Skip);
        assert_eq!(parse_stat_input("14"), StatInput::Value(14));
        assert_eq!(parse_stat_input(" 7 "), StatInput::Value(7));
        assert_eq!(parse_stat_input("0"), StatInput::Invalid);
        assert_eq!(parse_stat_input("-3"), StatInput::Invalid);
        assert_eq!(parse_stat_input("+3"), StatInput::Invalid);
        assert_eq!(parse_stat_input("ten"), StatInput::Invalid);
    }

    #[test]
    fn class_labels_are_normalized() {
        assert_eq!(normalize_class_label(" wIzArd "), "Wizard");
        assert_eq!(normalize_class_label("rogue"), "Rogue");
        assert_eq!(normalize_class_label(""), "");
    }

    #[test]
    fn builds_from_raw_answers() {
        let hero = build_from_prompts(
            " Grog ",
            "barbarian",
            [("STR", "18"), ("DEX", ""), ("CON", "lots"), ("LUCK", "5")],
            &[
                ItemDraft::new("Handaxe", "Throwable", "5"),
                ItemDraft::new("Gem", "Shiny", "a lot"),
            ],
        )
        .expect("barbarian");

        assert_eq!(hero.name(), "Grog");
        assert_eq!(hero.class(), Class::Barbarian);
        assert_eq!(hero.stats().get(StatCode::Str), Some(18));
        assert_eq!(hero.stats().get(StatCode::Con), Some(14));
        assert_eq!(hero.inventory().as_slice(), &[Item::new("Handaxe", "Throwable", 5)]);
    }

    #[test]
    fn no_items_means_empty_inventory() {
        let hero = build_from_prompts("Pike", "Cleric", [("WIS", "17")], &[]).expect("cleric");
        assert!(hero.inventory().is_empty());
        assert_eq!(hero.stats().get(StatCode::Wis), Some(17));

        let hero = build_from_prompts(
            "Vax",
            "Rogue",
            Vec::<(&str, &str)>::new(),
            &[ItemDraft::new("Gem", "Shiny", "lots")],
        )
        .expect("rogue");
        assert!(hero.inventory().is_empty());
    }

    #[test]
    fn unknown_class_is_the_only_failure() {
        let result = build_from_prompts("X", "artificer", Vec::<(&str, &str)>::new(), &[]);
        assert_eq!(result, Err(HeroError::UnsupportedClass("Artificer".to_string())));
    }
}
