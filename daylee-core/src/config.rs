//! Global daylee configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{DayleeError, DayleeResult};
use crate::store::SessionStore;

static DEFAULT_THINKING_DELAY: &str = "800ms";

fn default_thinking_delay() -> String {
    DEFAULT_THINKING_DELAY.to_string()
}

/// Global configuration at ~/.config/daylee/config.toml, overridable with
/// `DAYLEE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct DayleeConfig {
    /// Where the session snapshot lives. Defaults to the platform data
    /// directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Pause before the assistant answers, e.g. "800ms" or "1s".
    #[serde(default = "default_thinking_delay")]
    pub thinking_delay: String,
}

impl Default for DayleeConfig {
    fn default() -> Self {
        DayleeConfig {
            data_dir: None,
            thinking_delay: default_thinking_delay(),
        }
    }
}

impl DayleeConfig {
    pub fn config_path() -> DayleeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayleeError::Config("Could not determine config directory".into()))?
            .join("daylee");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// there is none.
    pub fn load() -> DayleeResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DayleeResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DAYLEE"))
            .build()
            .map_err(|e| DayleeError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayleeError::Config(e.to_string()))
    }

    /// Resolved data directory with `~` expanded.
    pub fn data_path(&self) -> DayleeResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => {
                let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => dirs::data_dir()
                .map(|d| d.join("daylee"))
                .ok_or_else(|| DayleeError::Config("Could not determine data directory".into())),
        }
    }

    pub fn session_store(&self) -> DayleeResult<SessionStore> {
        Ok(SessionStore::in_dir(&self.data_path()?))
    }

    pub fn thinking_delay(&self) -> DayleeResult<Duration> {
        humantime::parse_duration(&self.thinking_delay).map_err(|e| {
            DayleeError::Config(format!(
                "Invalid thinking_delay '{}': {e}",
                self.thinking_delay
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayleeResult<()> {
        let contents = format!(
            "\
# daylee configuration

# Where the family calendar is stored:
# data_dir = \"~/.local/share/daylee\"

# How long the assistant \"thinks\" before answering:
# thinking_delay = \"{}\"
",
            DEFAULT_THINKING_DELAY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayleeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayleeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        DayleeConfig::create_default_config(&path).unwrap();

        let config = DayleeConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.thinking_delay().unwrap(), Duration::from_millis(800));
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/daylee-test\"\nthinking_delay = \"2s\"\n").unwrap();

        let config = DayleeConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/daylee-test"));
        assert_eq!(config.thinking_delay().unwrap(), Duration::from_secs(2));
        assert_eq!(
            config.session_store().unwrap().path(),
            Path::new("/tmp/daylee-test/session.json")
        );
    }

    #[test]
    fn tilde_is_expanded() {
        let config = DayleeConfig {
            data_dir: Some(PathBuf::from("~/daylee")),
            ..Default::default()
        };
        assert!(!config.data_path().unwrap().starts_with("~"));
    }

    #[test]
    fn bad_delay_is_a_config_error() {
        let config = DayleeConfig {
            thinking_delay: "soon".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.thinking_delay(), Err(DayleeError::Config(_))));
    }
}
