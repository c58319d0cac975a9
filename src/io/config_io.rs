use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::PlannerConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse planner.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read the planner configuration from `planner.toml` in the given
/// directory. A missing file yields the built-in defaults; a malformed
/// file is an error, never silently defaulted.
pub fn read_config(dir: &Path) -> Result<PlannerConfig, ConfigError> {
    let path = dir.join("planner.toml");
    if !path.exists() {
        debug!(path = %path.display(), "no planner.toml, using defaults");
        return Ok(PlannerConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"[capacity]
warning_ratio = 0.75
over_ratio = 1.1

[[slots]]
key = "deep_work"
label = "Deep work"
start = "09:00"
end = "12:00"
capacity_hours = 3.0
"#
    }

    #[test]
    fn test_read_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("planner.toml"), sample_config()).unwrap();

        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.capacity.warning_ratio, 0.75);
        assert_eq!(config.capacity.over_ratio, 1.1);
        // Unspecified fields keep their defaults.
        assert_eq!(config.capacity.default_slot_hours, 8.0);
        assert_eq!(config.slots.len(), 1);
        assert_eq!(config.slots[0].key, "deep_work");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.capacity.warning_ratio, 0.7);
        assert!(config.slots.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("planner.toml"), "capacity = \"not a table\"").unwrap();
        assert!(matches!(
            read_config(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
