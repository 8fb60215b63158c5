//! User configuration, loaded through confy

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persistent configuration for the nanobanana binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the state files
    pub data_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_directory = dirs::data_dir()
            .map(|dir| dir.join("nanobanana"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { data_directory }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_into_platform_data_dir() {
        let config = Config::default();
        assert!(config.data_directory.ends_with("nanobanana") || config.data_directory == PathBuf::from("."));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            data_directory: PathBuf::from("/tmp/nanobanana"),
        };
        let serialized = serde_json::to_string(&config).expect("config serializes");
        let restored: Config = serde_json::from_str(&serialized).expect("config deserializes");
        assert_eq!(restored.data_directory, config.data_directory);
    }
}
