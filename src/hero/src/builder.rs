// src/hero/src/builder.rs

use items::Item;

use crate::class::Class;
use crate::core::{Character, HeroError, UNNAMED};
use crate::stats::filter_overrides;

/// Progress of a [`CharacterBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStage {
    Empty,
    NameSet,
    ClassSet,
    StatsSet,
    InventorySet,
}

/// Step-wise construction of a [`Character`].
///
/// Setting the class creates the character right away with the class
/// defaults, so later steps only adjust it:
///
/// - [`set_stats`](Self::set_stats) **merges** overrides into the default
///   block; stats not mentioned keep their default.
/// - [`set_inventory`](Self::set_inventory) **replaces** the starting kit.
///
/// Stats and inventory given before a class are ignored. The builder is
/// consumed by [`build`](Self::build), so nothing carries over from one
/// character to the next.
///
/// ```
/// use hero::CharacterBuilder;
///
/// let rogue = CharacterBuilder::new()
///     .set_name("Vax")
///     .set_class("Rogue")?
///     .set_stats([("DEX", 18)])
///     .build()?;
/// assert_eq!(rogue.name(), "Vax");
/// # Ok::<(), hero::HeroError>(())
/// ```
#[derive(Debug)]
pub struct CharacterBuilder {
    name: Option<String>,
    character: Option<Character>,
    stage: BuildStage,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            character: None,
            stage: BuildStage::Empty,
        }
    }

    pub fn stage(&self) -> BuildStage {
        self.stage
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(character) = self.character.as_mut() {
            character.set_name(name.clone());
        }
        self.name = Some(name);
        self.advance(BuildStage::NameSet);
        self
    }

    /// Look up `label` in the class table and create the character.
    ///
    /// Fails with [`HeroError::UnsupportedClass`] for labels outside the
    /// table; the build cannot continue after that.
    pub fn set_class(self, label: &str) -> Result<Self, HeroError> {
        let class = Class::from_label(label)?;
        Ok(self.with_class(class))
    }

    /// Typed form of [`set_class`](Self::set_class).
    pub fn with_class(mut self, class: Class) -> Self {
        let name = self.name.clone().unwrap_or_else(|| UNNAMED.to_string());
        tracing::debug!(%class, name = %name, "creating character from class defaults");
        self.character = Some(Character::new(name, class));
        self.advance(BuildStage::ClassSet);
        self
    }

    /// Merge stat overrides into the class defaults. Keys outside
    /// STR/DEX/CON/INT/WIS/CHA are dropped.
    pub fn set_stats<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        match self.character.as_mut() {
            Some(character) => {
                character.merge_stats(filter_overrides(overrides));
                self.advance(BuildStage::StatsSet);
            }
            None => tracing::debug!("ignoring stats set before class"),
        }
        self
    }

    /// Replace the inventory outright.
    pub fn set_inventory<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        match self.character.as_mut() {
            Some(character) => {
                character.replace_inventory(items.into_iter().collect());
                self.advance(BuildStage::InventorySet);
            }
            None => tracing::debug!("ignoring inventory set before class"),
        }
        self
    }

    pub fn build(self) -> Result<Character, HeroError> {
        self.character.ok_or(HeroError::ClassNotSet)
    }

    fn advance(&mut self, stage: BuildStage) {
        // Renaming after the class is chosen does not move the stage back.
        if stage == BuildStage::NameSet && self.character.is_some() {
            return;
        }
        self.stage = stage;
    }
}

impl Default for CharacterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
