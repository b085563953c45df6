use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Which half of the program to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Create new characters and save them.
    Build,
    /// Read characters back from a roster file.
    Load,
}

#[derive(Debug, Parser)]
#[command(version, about = "DND character roster builder", long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'f',
        long = "file",
        env = "DND_ROSTER_FILE",
        help = "Path to JSON file for saving/loading characters",
        default_value = save::DEFAULT_ROSTER_FILE
    )]
    pub file: PathBuf,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        help = "Skip the mode prompt and go straight to build or load"
    )]
    pub mode: Option<Mode>,

    #[arg(
        short = 'l',
        long = "log-level",
        env = "DND_ROSTER_LOG",
        help = "Log filter used when RUST_LOG is not set",
        default_value = "warn"
    )]
    pub log_level: String,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            file: PathBuf::from(save::DEFAULT_ROSTER_FILE),
            mode: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Arguments {
    /// `RUST_LOG` wins over `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

/// Install the stderr log subscriber; prompts stay on stdout.
pub fn init_tracing(arguments: &Arguments) {
    tracing_subscriber::fmt()
        .with_env_filter(arguments.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args =
            Arguments::try_parse_from(["dnd_roster", "-f", "party.json", "--mode", "load"])
                .expect("valid flags");
        assert_eq!(args.file, PathBuf::from("party.json"));
        assert_eq!(args.mode, Some(Mode::Load));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Arguments::try_parse_from(["dnd_roster", "--mode", "delete"]).is_err());
    }

    #[test]
    fn default_matches_store_default() {
        let args = Arguments::default();
        assert_eq!(args.file, PathBuf::from("characters.json"));
        assert_eq!(args.mode, None);
    }
}
