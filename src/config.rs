use crate::cli::output::OutputFormat;
use crate::converter::CaseStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub style: CaseStyle,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::Kebab,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// One source of settings. Only keys that are present override earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub style: Option<CaseStyle>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let layer: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), ?layer, "loaded config file");
        Ok(layer)
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        style: Option<CaseStyle>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let overrides = ConfigLayer {
            style,
            format,
            color: no_color.then_some(false),
        };

        Self::from_layers(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    /// Resolve defaults, then the global file, then the local file, then CLI overrides.
    /// Missing files are skipped.
    pub fn from_layers(
        global_path: Option<&Path>,
        local_path: &Path,
        overrides: ConfigLayer,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(global_path)?);
            }
        }

        // Load local config (overrides global)
        if local_path.exists() {
            config = config.merge(ConfigLayer::from_file(local_path)?);
        }

        Ok(config.merge(overrides))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
