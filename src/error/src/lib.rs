//! 角色存档错误处理模块
//!
//! Errors raised while saving and loading character rosters, plus the
//! mapping to user-facing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by roster save/load.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A record names a class outside the class table.
    #[error("record {index}: unsupported class '{label}'")]
    UnsupportedClass { index: usize, label: String },

    /// The roster file does not exist.
    #[error("roster file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The roster file is not a JSON array of character records.
    #[error("invalid roster format in {}: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    /// One character could not be converted for saving. Reported per
    /// record; the remaining characters are still written.
    #[error("could not serialize record {index} ('{name}'): {reason}")]
    RecordSerialization {
        index: usize,
        name: String,
        reason: String,
    },

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RosterError {
    /// Whether this error means the file was absent rather than unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound(_))
    }
}

/// 处理错误并转换为用户友好的消息
pub fn handle_error(error: &RosterError) -> String {
    match error {
        RosterError::NotFound(path) => format!("File '{}' not found.", path.display()),
        RosterError::InvalidFormat { path, .. } => {
            format!("Invalid JSON format in {}", path.display())
        }
        RosterError::UnsupportedClass { label, .. } => {
            format!("'{}' is not a supported class.", label)
        }
        RosterError::IoError(e) => match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                "Permission denied while accessing the roster file.".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        let err = RosterError::NotFound(PathBuf::from("missing.json"));
        assert!(err.is_not_found());
        assert_eq!(handle_error(&err), "File 'missing.json' not found.");

        let err = RosterError::InvalidFormat {
            path: PathBuf::from("bad.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(handle_error(&err), "Invalid JSON format in bad.json");
    }

    #[test]
    fn messages_name_the_record() {
        let err = RosterError::RecordSerialization {
            index: 2,
            name: "Scanlan".to_string(),
            reason: "stat block is missing CON".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not serialize record 2 ('Scanlan'): stat block is missing CON"
        );

        let err = RosterError::UnsupportedClass {
            index: 0,
            label: "Artificer".to_string(),
        };
        assert_eq!(err.to_string(), "record 0: unsupported class 'Artificer'");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: RosterError = io.into();
        assert!(matches!(err, RosterError::IoError(_)));
        assert_eq!(
            handle_error(&err),
            "Permission denied while accessing the roster file."
        );
    }
}
