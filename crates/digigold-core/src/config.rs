//! Configuration management for DigiGold.
//!
//! Loads configuration from ${DIGIGOLD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Named screens the router can show.
///
/// This is the closed set of navigable screens; there is no dynamic
/// registration and no parameters are passed between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Animated onboarding screen.
    Onboard,
    /// Login form (default initial screen).
    #[default]
    Login,
}

impl Screen {
    /// Parses a screen name as given on the command line.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "onboard" => Ok(Screen::Onboard),
            "login" => Ok(Screen::Login),
            other => anyhow::bail!("Unknown screen: {other} (expected \"onboard\" or \"login\")"),
        }
    }

    /// Returns the short display name for this screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Onboard => "onboard",
            Screen::Login => "login",
        }
    }
}

/// Onboarding screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Number of floating particles.
    pub particles: usize,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            particles: Config::DEFAULT_PARTICLES,
        }
    }
}

/// Login screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Simulated network delay for the demo submission path, in milliseconds.
    pub demo_delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            demo_delay_ms: Config::DEFAULT_DEMO_DELAY_MS,
        }
    }
}

impl LoginConfig {
    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }
}

pub mod paths {
    //! Path resolution for DigiGold configuration and data directories.
    //!
    //! DIGIGOLD_HOME resolution order:
    //! 1. DIGIGOLD_HOME environment variable (if set)
    //! 2. ~/.config/digigold (default)

    use std::path::PathBuf;

    /// Returns the DigiGold home directory.
    ///
    /// Checks DIGIGOLD_HOME env var first, falls back to ~/.config/digigold
    pub fn digigold_home() -> PathBuf {
        if let Ok(home) = std::env::var("DIGIGOLD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("digigold"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        digigold_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        digigold_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen shown at startup.
    pub initial_screen: Screen,

    /// Onboarding screen configuration.
    pub onboarding: OnboardingConfig,

    /// Login screen configuration.
    pub login: LoginConfig,
}

impl Config {
    const DEFAULT_PARTICLES: usize = 5;
    const DEFAULT_DEMO_DELAY_MS: u64 = 1200;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.initial_screen, Screen::Login);
        assert_eq!(config.onboarding.particles, 5);
        assert_eq!(config.login.demo_delay_ms, 1200);
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "initial_screen = \"onboard\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.initial_screen, Screen::Onboard);
        assert_eq!(config.onboarding.particles, 5); // default preserved
    }

    /// Config loading: nested sections load from file.
    #[test]
    fn test_load_nested_sections() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[onboarding]\nparticles = 8\n\n[login]\ndemo_delay_ms = 250\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.onboarding.particles, 8);
        assert_eq!(config.login.demo_delay(), Duration::from_millis(250));
    }

    /// Config loading: invalid TOML reports a contextual error.
    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "initial_screen = [not toml").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    /// Screen::parse accepts the closed set, rejects anything else.
    #[test]
    fn test_screen_parse() {
        assert_eq!(Screen::parse("onboard").unwrap(), Screen::Onboard);
        assert_eq!(Screen::parse("Login").unwrap(), Screen::Login);
        assert_eq!(Screen::parse(" LOGIN ").unwrap(), Screen::Login);
        assert!(Screen::parse("settings").is_err());
    }
}
