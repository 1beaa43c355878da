//! Configuration for the surface
//!
//! Sources, highest precedence first:
//! - command line arguments
//! - environment variables (`ASCIILIB_WIDTH`, `ASCIILIB_HEIGHT`,
//!   `ASCIILIB_FILLER`, `ASCIILIB_TITLE`)
//! - the config file (TOML)
//! - defaults
//!
//! The merged result is validated before anything is built from it.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::core::MAX_DIMENSION;
use crate::renderer::{ColorPair, Rgb};

/// Surface options shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct SurfaceArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Surface width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Surface height in rows
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,

    /// Character used to initialize and clear the surface
    #[arg(long, value_name = "CHAR")]
    pub filler: Option<char>,

    /// Surface title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Foreground color (#RRGGBB)
    #[arg(long, value_name = "COLOR")]
    pub foreground: Option<String>,

    /// Background color (#RRGGBB)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,
}

/// Surface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Character used to initialize and clear the surface
    pub filler: char,
    /// Window/surface label
    pub title: String,
    /// Foreground/background pair
    pub colors: ColorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 128,
            height: 171,
            filler: ' ',
            title: "AsciiLIB Game".to_string(),
            colors: ColorConfig::default(),
        }
    }
}

/// Color configuration as hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub foreground: String,
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            foreground: "#ffffff".to_string(),
            background: "#000000".to_string(),
        }
    }
}

impl ColorConfig {
    /// Parse a `#RRGGBB` color
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some((r, g, b))
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config error in '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &SurfaceArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            // An explicitly requested file must load
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_default_file(),
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The default config file if it exists and parses, else defaults
    fn load_default_file() -> Self {
        let Some(path) = Self::default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("asciilib").join("config.toml"))
    }

    /// Apply environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ASCIILIB_WIDTH") {
            self.width = val
                .parse()
                .map_err(|_| ConfigError::invalid("ASCIILIB_WIDTH", format!("'{}' is not a number", val)))?;
        }
        if let Some(val) = lookup("ASCIILIB_HEIGHT") {
            self.height = val
                .parse()
                .map_err(|_| ConfigError::invalid("ASCIILIB_HEIGHT", format!("'{}' is not a number", val)))?;
        }
        if let Some(val) = lookup("ASCIILIB_FILLER") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.filler = c,
                _ => {
                    return Err(ConfigError::invalid(
                        "ASCIILIB_FILLER",
                        format!("'{}' is not a single character", val),
                    ))
                }
            }
        }
        if let Some(val) = lookup("ASCIILIB_TITLE") {
            self.title = val;
        }
        Ok(())
    }

    /// Apply CLI arguments to config
    pub fn apply_args(&mut self, args: &SurfaceArgs) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(filler) = args.filler {
            self.filler = filler;
        }
        if let Some(title) = &args.title {
            self.title = title.clone();
        }
        if let Some(fg) = &args.foreground {
            self.colors.foreground = fg.clone();
        }
        if let Some(bg) = &args.background {
            self.colors.background = bg.clone();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.width) {
            return Err(ConfigError::invalid(
                "width",
                format!("must be between 1 and {}", MAX_DIMENSION),
            ));
        }
        if !(1..=MAX_DIMENSION).contains(&self.height) {
            return Err(ConfigError::invalid(
                "height",
                format!("must be between 1 and {}", MAX_DIMENSION),
            ));
        }

        // A filler wider or narrower than one column skews every row
        if self.filler.width() != Some(1) {
            return Err(ConfigError::invalid(
                "filler",
                format!("{:?} does not occupy exactly one column", self.filler),
            ));
        }

        self.validate_color(&self.colors.foreground, "colors.foreground")?;
        self.validate_color(&self.colors.background, "colors.background")?;

        Ok(())
    }

    fn validate_color(&self, color: &str, field: &str) -> Result<(), ConfigError> {
        if ColorConfig::parse_hex(color).is_none() {
            return Err(ConfigError::invalid(
                field,
                format!("Invalid hex color '{}'. Expected format: #RRGGBB", color),
            ));
        }
        Ok(())
    }

    /// The configured colors, falling back to white on black
    pub fn color_pair(&self) -> ColorPair {
        let default = ColorPair::default();
        ColorPair {
            foreground: ColorConfig::parse_hex(&self.colors.foreground).unwrap_or(default.foreground),
            background: ColorConfig::parse_hex(&self.colors.background).unwrap_or(default.background),
        }
    }
}
