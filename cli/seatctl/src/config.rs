//! CLI configuration.
//!
//! Resolved from flags and environment:
//! - Data directory: `--data-dir` / `SEAT_DATA_DIR`, else the platform data
//!   directory, else `./data`
//! - Log level: `SEAT_LOG_LEVEL` (overridden by `RUST_LOG`)

use std::path::PathBuf;

use directories::ProjectDirs;

/// Default log filter when neither `RUST_LOG` nor `SEAT_LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Fallback data directory when no platform directory is available.
const FALLBACK_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Build the configuration, preferring an explicit data directory.
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let log_level =
            std::env::var("SEAT_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            log_level,
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "seatplan", "seat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config::load(Some(PathBuf::from("/tmp/seats")));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/seats"));
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn test_default_data_dir_is_not_empty() {
        assert!(!default_data_dir().as_os_str().is_empty());
    }
}
