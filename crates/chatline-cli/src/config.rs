//! Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for chatline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chat endpoint URL
    pub endpoint: Option<String>,
    /// Whether to use TUI mode by default
    pub tui: Option<bool>,
    /// Color theme ("dark" or "light")
    pub theme: Option<String>,
    /// Where logs go in TUI mode
    pub log_file: Option<String>,
}

impl Config {
    /// Get the config directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatline")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("CHATLINE_CONFIG_PATH") {
            return PathBuf::from(path);
        }
        Self::config_dir().join("config.toml")
    }

    /// Default log file for TUI mode
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("chatline.log")
    }

    /// Load config from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`; a missing or broken file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Write the example config if no file exists yet
    pub fn init() -> std::io::Result<PathBuf> {
        let path = Self::config_path();
        Self::init_at(&path)?;
        Ok(path)
    }

    fn init_at(path: &Path) -> std::io::Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, example_config())
    }
}

/// Generate example config content
pub fn example_config() -> &'static str {
    r#"# chatline configuration file
# Place at ~/.config/chatline/config.toml (Linux/Mac) or %APPDATA%\chatline\config.toml (Windows)

# Chat endpoint that accepts {"message": "..."} and answers {"responses": [...]}
endpoint = "http://localhost:5001/chat"

# Whether to use TUI mode by default (true by default)
# Set to false for simple stdin/stdout mode
tui = true

# Color theme: dark or light
theme = "dark"

# Log file for TUI mode (optional)
# log_file = "/tmp/chatline.log"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some(chatline_client::DEFAULT_ENDPOINT)
        );
        assert_eq!(config.tui, Some(true));
        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("tui = false").unwrap();
        assert_eq!(config.tui, Some(false));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/chatline/config.toml"));
        assert!(config.endpoint.is_none());
        assert!(config.tui.is_none());
    }

    #[test]
    fn test_init_writes_example_once() {
        let dir = std::env::temp_dir().join(format!("chatline-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        Config::init_at(&path).unwrap();
        let loaded = Config::load_from(&path);
        assert_eq!(loaded.tui, Some(true));

        // An existing file is left alone
        fs::write(&path, "tui = false\n").unwrap();
        Config::init_at(&path).unwrap();
        assert_eq!(Config::load_from(&path).tui, Some(false));

        let _ = fs::remove_dir_all(&dir);
    }
}
