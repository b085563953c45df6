// src/hero/src/class.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

use items::Item;

use crate::core::HeroError;
use crate::stats::StatBlock;

/// Character class. The twelve labels are the only representable classes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
pub enum Class {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

/// Starting item entry in the class table.
#[derive(Debug)]
pub struct StarterItem {
    pub name: &'static str,
    pub description: &'static str,
    pub value: i64,
}

impl StarterItem {
    pub fn to_item(&self) -> Item {
        Item::new(self.name, self.description, self.value)
    }
}

/// Per-class defaults: stat block (STR..CHA), starting item and ability.
#[derive(Debug)]
pub struct ClassProfile {
    pub class: Class,
    pub label: &'static str,
    pub stats: [i32; 6],
    pub starting_item: StarterItem,
    pub ability: &'static str,
}

// Indexed by `Class as usize`; keep in declaration order.
static PROFILES: [ClassProfile; 12] = [
    ClassProfile {
        class: Class::Barbarian,
        label: "Barbarian",
        stats: [15, 12, 14, 8, 10, 10],
        starting_item: StarterItem {
            name: "Battle Axe",
            description: "A heavy weapon for brutal combat",
            value: 200,
        },
        ability: "Rage: Unleash devastating attacks with increased strength!",
    },
    ClassProfile {
        class: Class::Bard,
        label: "Bard",
        stats: [10, 14, 12, 12, 10, 15],
        starting_item: StarterItem {
            name: "Lyre",
            description: "A musical instrument for inspiring allies",
            value: 100,
        },
        ability: "Inspiration: Uplift allies with captivating performances!",
    },
    ClassProfile {
        class: Class::Cleric,
        label: "Cleric",
        stats: [12, 10, 14, 10, 15, 12],
        starting_item: StarterItem {
            name: "Holy Symbol",
            description: "A sacred item for divine magic",
            value: 150,
        },
        ability: "Divine Healing: Restore health through divine powers!",
    },
    ClassProfile {
        class: Class::Druid,
        label: "Druid",
        stats: [10, 12, 12, 12, 15, 10],
        starting_item: StarterItem {
            name: "Wooden Staff",
            description: "A staff infused with nature’s energy",
            value: 120,
        },
        ability: "Wild Shape: Transform into animals for versatility in combat!",
    },
    ClassProfile {
        class: Class::Fighter,
        label: "Fighter",
        stats: [15, 12, 14, 10, 10, 10],
        starting_item: StarterItem {
            name: "Longsword",
            description: "A balanced weapon for skilled fighters",
            value: 175,
        },
        ability: "Second Wind: Recover quickly from injuries!",
    },
    ClassProfile {
        class: Class::Monk,
        label: "Monk",
        stats: [12, 15, 12, 10, 14, 10],
        starting_item: StarterItem {
            name: "Prayer Beads",
            description: "Symbol of meditation and discipline",
            value: 80,
        },
        ability: "Flurry of Blows: Attack multiple times with precision!",
    },
    ClassProfile {
        class: Class::Paladin,
        label: "Paladin",
        stats: [14, 10, 14, 10, 12, 15],
        starting_item: StarterItem {
            name: "Blessed Shield",
            description: "A shield blessed with divine protection",
            value: 180,
        },
        ability: "Divine Smite: Channel divine energy to deal massive damage!",
    },
    ClassProfile {
        class: Class::Ranger,
        label: "Ranger",
        stats: [12, 14, 12, 10, 14, 10],
        starting_item: StarterItem {
            name: "Hunting Bow",
            description: "A reliable bow for ranged combat",
            value: 160,
        },
        ability: "Hunter's Mark: Track and deal extra damage to prey!",
    },
    ClassProfile {
        class: Class::Rogue,
        label: "Rogue",
        stats: [10, 15, 12, 12, 10, 14],
        starting_item: StarterItem {
            name: "Dagger",
            description: "A quick weapon for stealth attacks",
            value: 130,
        },
        ability: "Sneak Attack: Exploit weaknesses to strike critical blows!",
    },
    ClassProfile {
        class: Class::Sorcerer,
        label: "Sorcerer",
        stats: [10, 12, 14, 10, 12, 15],
        starting_item: StarterItem {
            name: "Arcane Tome",
            description: "A book containing powerful spells",
            value: 200,
        },
        ability: "Spell-casting: Cast powerful spells fueled by innate magic!",
    },
    ClassProfile {
        class: Class::Warlock,
        label: "Warlock",
        stats: [10, 12, 12, 14, 10, 15],
        starting_item: StarterItem {
            name: "Dark Amulet",
            description: "An artifact tied to a mysterious patron",
            value: 190,
        },
        ability: "Eldritch Blast: Unleash arcane power granted by your patron!",
    },
    ClassProfile {
        class: Class::Wizard,
        label: "Wizard",
        stats: [8, 12, 10, 15, 14, 10],
        starting_item: StarterItem {
            name: "Magic Wand",
            description: "A basic wand for casting spells",
            value: 150,
        },
        ability: "Arcane Mastery: Harness deep knowledge to control magic!",
    },
];

impl Class {
    /// Look up a class by its exact label.
    pub fn from_label(label: &str) -> Result<Class, HeroError> {
        Class::from_str(label).map_err(|_| HeroError::UnsupportedClass(label.to_string()))
    }

    /// All class labels in table order.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Class::iter().map(|class| class.label())
    }

    pub fn profile(&self) -> &'static ClassProfile {
        &PROFILES[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Default stat block for the class.
    pub fn default_stats(&self) -> StatBlock {
        StatBlock::from_scores(self.profile().stats)
    }

    /// Items a freshly created character of this class carries.
    pub fn starting_kit(&self) -> Vec<Item> {
        vec![self.profile().starting_item.to_item()]
    }

    pub fn special_ability(&self) -> &'static str {
        self.profile().ability
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
