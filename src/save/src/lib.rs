// src/save.rs

use error::RosterError;
use hero::{Character, CharacterBuilder, StatCode, ToRecord, UNNAMED};
use items::Item;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::str::FromStr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Default roster file used when the caller does not name one.
pub const DEFAULT_ROSTER_FILE: &str = "characters.json";

/// Outcome of a save: how many characters were written and which were
/// skipped.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub saved: usize,
    /// One [`RosterError::RecordSerialization`] per skipped character.
    pub skipped: Vec<RosterError>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A record as read back from disk. Every field is optional here; the
/// builder fills in what is missing.
///
/// Stat values stay raw until their key is known to be a stat code, so an
/// unknown key is dropped whatever it holds.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    name: Option<String>,
    character_class: Option<String>,
    stats: Option<BTreeMap<String, Value>>,
    inventory: Option<Vec<Item>>,
}

impl StoredRecord {
    fn into_character(self, index: usize, path: &Path) -> Result<Character, RosterError> {
        let label = self.character_class.ok_or_else(|| RosterError::InvalidFormat {
            path: path.to_path_buf(),
            reason: format!("record {} has no character_class", index),
        })?;

        let mut builder = CharacterBuilder::new()
            .set_name(self.name.unwrap_or_else(|| UNNAMED.to_string()))
            .set_class(&label)
            .map_err(|_| RosterError::UnsupportedClass { index, label })?;

        if let Some(stats) = self.stats {
            builder = builder.set_stats(stat_scores(stats, index, path)?);
        }
        if let Some(items) = self.inventory {
            builder = builder.set_inventory(items);
        }

        builder.build().map_err(|e| RosterError::InvalidFormat {
            path: path.to_path_buf(),
            reason: format!("record {}: {}", index, e),
        })
    }
}

/// Scores for the known stat codes in a stored `stats` object.
fn stat_scores(
    stats: BTreeMap<String, Value>,
    index: usize,
    path: &Path,
) -> Result<Vec<(StatCode, i32)>, RosterError> {
    let mut scores = Vec::with_capacity(stats.len());
    for (key, value) in stats {
        let Ok(code) = StatCode::from_str(&key) else {
            tracing::debug!(index, key = %key, "dropping unknown stat key");
            continue;
        };
        let score = match value.as_i64() {
            Some(raw) => i32::try_from(raw).map_err(|_| RosterError::InvalidFormat {
                path: path.to_path_buf(),
                reason: format!(
                    "record {}: {} score {} is outside {}..={}",
                    index,
                    code,
                    raw,
                    i32::MIN,
                    i32::MAX
                ),
            })?,
            None => {
                return Err(RosterError::InvalidFormat {
                    path: path.to_path_buf(),
                    reason: format!("record {}: {} score {} is not an integer", index, code, value),
                });
            }
        };
        scores.push((code, score));
    }
    Ok(scores)
}

/// 角色存档系统
///
/// Relative file names are resolved against the store's root directory.
#[derive(Debug, Clone, Default)]
pub struct CharacterStore {
    root: PathBuf,
}

impl CharacterStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Full path for a roster file name.
    pub fn path_for(&self, file: impl AsRef<Path>) -> PathBuf {
        self.root.join(file)
    }

    /// Write `characters` to `file` as a pretty-printed JSON array,
    /// replacing any previous contents.
    ///
    /// Characters that fail to convert are skipped and listed in the
    /// report; the rest are still written.
    pub fn save<C: ToRecord>(
        &self,
        characters: &[C],
        file: impl AsRef<Path>,
    ) -> Result<SaveReport, RosterError> {
        let path = self.path_for(file);
        let mut report = SaveReport::default();
        let mut records = Vec::with_capacity(characters.len());

        for (index, character) in characters.iter().enumerate() {
            match character.to_record() {
                Ok(record) => records.push(record),
                Err(e) => {
                    let name = character.record_name().to_string();
                    tracing::warn!(index, name = %name, error = %e, "skipping character that failed to serialize");
                    report.skipped.push(RosterError::RecordSerialization {
                        index,
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        // 创建临时文件, deleted on drop unless persisted
        let temp = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(temp);
        serde_json::to_writer_pretty(&mut writer, &records).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
        // 确保数据写入磁盘
        let temp = writer.into_inner().map_err(|e| e.into_error())?;

        // 原子性重命名
        temp.persist(&path).map_err(|e| e.error)?;

        report.saved = records.len();
        tracing::info!(
            path = %path.display(),
            saved = report.saved,
            skipped = report.skipped.len(),
            "roster saved"
        );
        Ok(report)
    }

    /// Read a roster file and rebuild every character in file order.
    ///
    /// A missing file is [`RosterError::NotFound`]; anything that is not a
    /// JSON array of character objects is [`RosterError::InvalidFormat`].
    /// One bad record fails the whole load.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<Vec<Character>, RosterError> {
        let path = self.path_for(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RosterError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        let stored: Vec<StoredRecord> =
            serde_json::from_str(&contents).map_err(|e| RosterError::InvalidFormat {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let characters = stored
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_character(index, &path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(path = %path.display(), loaded = characters.len(), "roster loaded");
        Ok(characters)
    }

    /// 检查指定文件是否存在
    pub fn has_roster(&self, file: impl AsRef<Path>) -> bool {
        self.path_for(file).is_file()
    }

    /// Roster files (`*.json`) in the root directory, sorted by name.
    pub fn list_rosters(&self) -> Result<Vec<PathBuf>, RosterError> {
        let dir = if self.root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.root.as_path()
        };

        let mut rosters = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                if let Some(name) = path.file_name() {
                    rosters.push(PathBuf::from(name));
                }
            }
        }
        rosters.sort();
        Ok(rosters)
    }
}

/// Append `.json` unless the name already ends with it.
pub fn ensure_json_extension(file: impl AsRef<Path>) -> PathBuf {
    let file = file.as_ref();
    if file.extension().is_some_and(|ext| ext == "json") {
        return file.to_path_buf();
    }
    let mut name = OsString::from(file.as_os_str());
    name.push(".json");
    PathBuf::from(name)
}
