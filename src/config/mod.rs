use std::path::{Path, PathBuf};
use anyhow::{Result, Context, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::profile;
use crate::recall::DEFAULT_RECALL_CAPACITY;
use crate::session::SessionOptions;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    /// General settings
    pub general: GeneralConfig,

    /// Prompt and history settings
    pub session: SessionConfig,

    /// TUI settings
    pub tui: TuiConfig,

    /// Things worth logging that happened while loading, kept until a
    /// subscriber is installed
    #[serde(skip)]
    pub notices: Vec<ConfigNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNotice {
    Loaded(PathBuf),
    NoDefaultPath(String),
    Adjusted(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level or filter directive
    pub log_level: String,

    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Label shown before every command
    pub prompt: String,

    /// Number of commands kept for up/down recall
    pub recall_capacity: usize,

    /// Seed the transcript with the welcome banner
    pub show_welcome: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Follow the newest transcript line
    pub auto_scroll: bool,

    /// Show the profile sidebar on wide terminals
    pub show_profile: bool,

    /// Clock refresh interval
    pub tick_millis: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            session: SessionConfig::default(),
            tui: TuiConfig::default(),
            notices: Vec::new(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: profile::DEFAULT_PROMPT.to_string(),
            recall_capacity: DEFAULT_RECALL_CAPACITY,
            show_welcome: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            show_profile: true,
            tick_millis: 1000,
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.sanitize();

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the default configuration path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".portfolio-terminal").join("config.toml"))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: self.session.prompt.clone(),
            recall_capacity: self.session.recall_capacity,
            show_welcome: self.session.show_welcome,
        }
    }

    fn sanitize(&mut self) {
        if self.session.recall_capacity == 0 {
            self.notices.push(ConfigNotice::Adjusted(
                "recall_capacity must be at least 1, using 1".to_string(),
            ));
            self.session.recall_capacity = 1;
        }
        if self.tui.tick_millis == 0 {
            self.notices.push(ConfigNotice::Adjusted(
                "tick_millis must be positive, using default".to_string(),
            ));
            self.tui.tick_millis = TuiConfig::default().tick_millis;
        }
    }

    /// Log and forget the notices gathered while loading. Call once the
    /// subscriber is up.
    pub fn report_notices(&mut self) {
        for notice in self.notices.drain(..) {
            match notice {
                ConfigNotice::Loaded(path) => info!(path = %path.display(), "loaded config"),
                ConfigNotice::NoDefaultPath(e) => warn!("{e}, using default config"),
                ConfigNotice::Adjusted(message) => warn!("{message}"),
            }
        }
    }

    /// Merge with command-line overrides
    pub fn merge_overrides(&mut self, overrides: Vec<(String, String)>) -> Result<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "log_level" => self.general.log_level = value,
                "log_file" => self.general.log_file = Some(PathBuf::from(value)),
                "prompt" => self.session.prompt = value,
                "recall_capacity" => self.session.recall_capacity = value.parse()
                    .with_context(|| format!("Invalid recall_capacity: {}", value))?,
                "show_welcome" => self.session.show_welcome = value.parse()
                    .with_context(|| format!("Invalid show_welcome: {}", value))?,
                "auto_scroll" => self.tui.auto_scroll = value.parse()
                    .with_context(|| format!("Invalid auto_scroll: {}", value))?,
                "show_profile" => self.tui.show_profile = value.parse()
                    .with_context(|| format!("Invalid show_profile: {}", value))?,
                _ => bail!("Unknown config key: {}", key),
            }
        }
        self.sanitize();
        Ok(())
    }
}

/// Split a `key=value` override.
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("Expected key=value, got: {}", raw),
    }
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_or_default(path: Option<&Path>) -> Result<PortfolioConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match PortfolioConfig::default_path() {
            Ok(p) => p,
            Err(e) => {
                let mut config = PortfolioConfig::default();
                config.notices.push(ConfigNotice::NoDefaultPath(e.to_string()));
                return Ok(config);
            }
        },
    };

    if config_path.exists() {
        let mut config = PortfolioConfig::load(&config_path)?;
        config.notices.insert(0, ConfigNotice::Loaded(config_path));
        Ok(config)
    } else if path.is_some() {
        bail!("Config file not found: {}", config_path.display())
    } else {
        Ok(PortfolioConfig::default())
    }
}
