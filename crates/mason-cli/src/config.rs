//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged at the call-site, not here)
//! 2. `config.toml` in the platform config directory
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Version used when `--version` is not passed. `None` falls through to
    /// the core default ("1.0.0").
    pub version: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Override for the template directory; defaults to `templates/` inside
    /// the config directory.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` overrides the default location (useful in tests); a
    /// missing file is not an error — it simply means defaults.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Platform config directory for mason.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mason` in the current directory.
    pub fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "mason", "mason")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".mason"))
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Directory holding installed templates.
    pub fn template_dir(&self) -> PathBuf {
        self.templates
            .directory
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("templates"))
    }

    /// Create the config and template directories if they don't exist yet.
    ///
    /// Runs on every startup so a fresh install has somewhere to put
    /// templates before the first `config.toml` is ever written.
    pub fn ensure_layout(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("creating config directory {}", config_dir.display()))?;

        let template_dir = self.template_dir();
        std::fs::create_dir_all(&template_dir)
            .with_context(|| format!("creating template directory {}", template_dir.display()))?;

        Ok(())
    }
}
