// src/hero/src/stats.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The six ability scores, in sheet order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum StatCode {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl StatCode {
    pub fn all() -> [StatCode; 6] {
        [
            StatCode::Str,
            StatCode::Dex,
            StatCode::Con,
            StatCode::Int,
            StatCode::Wis,
            StatCode::Cha,
        ]
    }

    /// Wire code, e.g. `"STR"`.
    pub fn code(&self) -> &'static str {
        match self {
            StatCode::Str => "STR",
            StatCode::Dex => "DEX",
            StatCode::Con => "CON",
            StatCode::Int => "INT",
            StatCode::Wis => "WIS",
            StatCode::Cha => "CHA",
        }
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stat mapping keyed by [`StatCode`].
///
/// Serialized as a JSON object (`{"STR": 15, ...}`) in sheet order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBlock(BTreeMap<StatCode, i32>);

impl StatBlock {
    /// Build a full block from scores given in sheet order (STR..CHA).
    pub fn from_scores(scores: [i32; 6]) -> Self {
        Self(StatCode::iter().zip(scores).collect())
    }

    pub fn get(&self, code: StatCode) -> Option<i32> {
        self.0.get(&code).copied()
    }

    /// Override scores key by key. Keys not present in `overrides` keep
    /// their current value.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (StatCode, i32)>,
    {
        for (code, value) in overrides {
            self.0.insert(code, value);
        }
    }

    /// First stat code with no score, if any.
    pub fn missing(&self) -> Option<StatCode> {
        StatCode::iter().find(|code| !self.0.contains_key(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCode, i32)> + '_ {
        self.0.iter().map(|(code, value)| (*code, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Keep only the whitelisted stat codes from raw `(key, value)` pairs.
///
/// Unknown keys are dropped silently; matching is exact (`"str"` is not
/// `"STR"`).
pub fn filter_overrides<I, K>(raw: I) -> Vec<(StatCode, i32)>
where
    I: IntoIterator<Item = (K, i32)>,
    K: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|(key, value)| match StatCode::from_str(key.as_ref()) {
            Ok(code) => Some((code, value)),
            Err(_) => {
                tracing::debug!(key = key.as_ref(), "dropping unknown stat key");
                None
            }
        })
        .collect()
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (code, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", code, value)?;
        }
        f.write_str("}")
    }
}

impl FromIterator<(StatCode, i32)> for StatBlock {
    fn from_iter<T: IntoIterator<Item = (StatCode, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
