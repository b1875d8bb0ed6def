//! Global agenda configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::STORAGE_FILE;
use crate::error::{AgendaError, AgendaResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/agenda";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn is_empty(s: &String) -> bool {
    s.is_empty()
}

/// Configuration at ~/.config/agenda/config.toml.
///
/// `script_url` is the settings singleton of the sync channel: empty by
/// default, replaced wholesale on save.
#[derive(Serialize, Deserialize, Clone)]
pub struct AgendaConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Webhook URL new meetings are mirrored to. Empty disables the channel.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub script_url: String,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_dir: default_data_dir(),
            script_url: String::new(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: AgendaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/agenda/config.toml.
    pub fn save(&self) -> AgendaResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# Where meeting data lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Webhook URL for mirroring new meetings to a spreadsheet:
# script_url = \"https://script.google.com/macros/s/.../exec\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Absolute data directory, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Path of the persisted meeting collection.
    pub fn meetings_file(&self) -> PathBuf {
        self.data_path().join(STORAGE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_toml() {
        let mut config = AgendaConfig::default();
        config.script_url = "https://script.google.com/macros/s/abc/exec".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        // The default data_dir is left out of the file entirely.
        assert!(!serialized.contains("data_dir"));

        let parsed: AgendaConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.script_url, config.script_url);
        assert_eq!(parsed.data_dir, default_data_dir());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let parsed: AgendaConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.script_url, "");
        assert_eq!(parsed.data_dir, default_data_dir());
    }

    #[test]
    fn default_config_file_is_all_comments() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        AgendaConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: AgendaConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.script_url, "");
    }

    #[test]
    fn meetings_file_lives_under_the_data_dir() {
        let config = AgendaConfig {
            data_dir: PathBuf::from("/tmp/agenda-test"),
            script_url: String::new(),
        };
        assert_eq!(
            config.meetings_file(),
            PathBuf::from("/tmp/agenda-test/meetings.json")
        );
    }
}
