use std::path::{Path, PathBuf};

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";
const HISTORY_FILE: &str = "solves.json";
const ENV_PREFIX: &str = "PRISM_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Discipline used by `stats` when none is given
    pub default_puzzle: String,
    pub history_file: Option<PathBuf>,
    /// `tracing` filter directive for stderr logging
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_puzzle: "3x3".to_string(),
            history_file: None,
            log_filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),

    #[error("Failed to render config: {0}")]
    Render(toml::ser::Error),
}

#[derive(Debug)]
pub struct Config {
    pub settings: Settings,
    pub config_dir: PathBuf,
    history_file: PathBuf,
}

impl Config {
    /// Load settings from defaults, then `settings.toml`, then `PRISM_*` env vars
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("com", "Prism", "Prism");

        let config_dir = override_path
            .or_else(|| dirs.as_ref().map(|dirs| dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::NoDirectory)?;

        let settings: Settings = Self::figment(&config_dir).extract().map_err(Box::new)?;

        let history_file = settings.history_file.clone().unwrap_or_else(|| {
            dirs.map(|dirs| dirs.data_dir().join(HISTORY_FILE))
                .unwrap_or_else(|| config_dir.join(HISTORY_FILE))
        });

        Ok(Self {
            settings,
            config_dir,
            history_file,
        })
    }

    fn figment(config_dir: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_dir.join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Path of the solve history snapshot
    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    /// The effective settings, rendered as they would appear in `settings.toml`
    pub fn render(&self) -> Result<String, ConfigError> {
        let settings = Settings {
            history_file: Some(self.history_file.clone()),
            ..self.settings.clone()
        };
        Ok(toml::to_string_pretty(&settings)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("prism-config-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = scratch_dir("defaults");
        let config = Config::get(Some(dir.clone())).unwrap();

        assert_eq!(config.settings.default_puzzle, "3x3");
        assert_eq!(config.settings.log_filter, "warn");
        assert!(config.history_file().ends_with(HISTORY_FILE));
        assert_eq!(config.config_dir, dir);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_settings_file_overrides_defaults() {
        let dir = scratch_dir("overrides");
        std::fs::write(
            dir.join(SETTINGS_FILE),
            "default_puzzle = \"4x4\"\nhistory_file = \"/tmp/prism/solves.json\"\n",
        )
        .unwrap();

        let config = Config::get(Some(dir.clone())).unwrap();
        assert_eq!(config.settings.default_puzzle, "4x4");
        assert_eq!(config.settings.log_filter, "warn");
        assert_eq!(config.history_file(), Path::new("/tmp/prism/solves.json"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = scratch_dir("invalid");
        std::fs::write(dir.join(SETTINGS_FILE), "log_filter = [1, 2]\n").unwrap();

        assert!(matches!(
            Config::get(Some(dir.clone())),
            Err(ConfigError::Parse(_))
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_render_round_trips() {
        let config = Config {
            settings: Settings::default(),
            config_dir: PathBuf::from("/tmp"),
            history_file: PathBuf::from("/tmp/solves.json"),
        };

        let rendered = config.render().unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            Settings {
                history_file: Some(PathBuf::from("/tmp/solves.json")),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_history_file_resolved_once() {
        let dir = scratch_dir("resolved");
        let config = Config::get(Some(dir.clone())).unwrap();

        // Unset in the settings, resolved to a default location
        assert_eq!(config.settings.history_file, None);
        assert!(config.history_file().ends_with(HISTORY_FILE));

        let rendered: Settings = toml::from_str(&config.render().unwrap()).unwrap();
        assert_eq!(
            rendered.history_file.as_deref(),
            Some(config.history_file())
        );

        std::fs::remove_dir_all(dir).unwrap();
    }
}
