use std::path::{Path, PathBuf};

use serde::Deserialize;

use solfege_types::{ScaleMode, A4_FREQUENCY};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    tuning_a4: Option<f64>,
    scale_mode: Option<String>,
}

#[derive(Deserialize, Default)]
struct OutputConfig {
    format: Option<String>,
}

/// How the command-line front end renders answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct Config {
    defaults: DefaultsConfig,
    output: OutputConfig,
}

impl Config {
    /// Embedded defaults, overridden by the user's config file if there is one.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::embedded(),
        }
    }

    /// Embedded defaults, overridden by the file at `path`. An unreadable or malformed
    /// file is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    fn embedded() -> Self {
        let base: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!(target: "config", "embedded config.toml is invalid: {}", e);
            ConfigFile::default()
        });
        Config {
            defaults: base.defaults,
            output: base.output,
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        if user.defaults.tuning_a4.is_some() {
            self.defaults.tuning_a4 = user.defaults.tuning_a4;
        }
        if user.defaults.scale_mode.is_some() {
            self.defaults.scale_mode = user.defaults.scale_mode;
        }
        if user.output.format.is_some() {
            self.output.format = user.output.format;
        }
    }

    /// Reference pitch for A4. Non-finite or non-positive values fall back to 440 Hz.
    pub fn tuning_a4(&self) -> f64 {
        self.defaults
            .tuning_a4
            .filter(|hz| hz.is_finite() && *hz > 0.0)
            .unwrap_or(A4_FREQUENCY)
    }

    pub fn default_scale_mode(&self) -> ScaleMode {
        self.defaults
            .scale_mode
            .as_deref()
            .and_then(ScaleMode::from_name)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output.format = Some(
            match format {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            }
            .to_string(),
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::embedded()
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("solfege").join("config.toml"))
}
