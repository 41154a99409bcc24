//! The main config loading module for filebox.
//!
//! Handles loading and deserializing settings from `filebox.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//!
//! Also implements default config generation for `fbx --init`.

use crate::config::{Display, General};
use crate::core::{Formatter, SortOrder};
use crate::utils::get_home;

use serde::Deserialize;
use tracing::{debug, warn};

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
/// It is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    sort: SortOrder,
    display: Display,
}

/// Main configuration struct for filebox
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    general: General,
    sort: SortOrder,
    display: Display,
}

/// Conversion from RawConfig to Config
/// Out of range values are clamped here.
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            sort: raw.sort,
            display: raw.display.clamped(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const FULL_TOML: &str = r##"# filebox.toml - default configuration for filebox

# Note:
# Commented values are the internal defaults of filebox.
# To get configuration help, run fbx --config-help.

[general]
dirs_first = true
show_hidden = false

# Sort key is one of "name", "size" or "type"
[sort]
key = "name"
asc = true

[display]
# width = 80
# timestamps = true
"##;

const MINIMAL_TOML: &str = r##"# filebox.toml - minimal configuration
# The rest uses internal defaults, see fbx --config-help.

[sort]
key = "name"
asc = true
"##;

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            debug!(
                path = %path.display(),
                "no filebox.toml found, using internal defaults"
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "could not read config, using defaults");
            Self::default()
        })
    }

    /// Load configuration from a specific file.
    /// Parse errors are reported and replaced by the defaults, read errors are returned.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse configuration from toml text, falling back to defaults on invalid input.
    pub fn parse(content: &str) -> Self {
        match toml::from_str::<RawConfig>(content) {
            Ok(raw) => raw.into(),
            Err(e) => {
                warn!("error parsing config: {}", e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Listing formatter for the configured order, or `order` when given.
    pub fn formatter(&self, order: Option<SortOrder>) -> Formatter {
        self.general.formatter(order.unwrap_or(self.sort))
    }

    /// Determine the default configuration file path.
    /// Checks the FILEBOX_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/filebox/filebox.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FILEBOX_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("filebox/filebox.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/filebox/filebox.toml");
        }
        PathBuf::from("filebox.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path, minimal: bool) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if minimal { MINIMAL_TOML } else { FULL_TOML };
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SortKey;
    use crate::utils::{DEFAULT_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH};
    use tempfile::tempdir;

    #[test]
    fn defaults_when_empty() {
        let config = Config::parse("");
        assert_eq!(config, Config::default());
        assert!(config.general().dirs_first());
        assert!(!config.general().show_hidden());
        assert_eq!(config.sort(), SortOrder::new(SortKey::Name, true));
        assert_eq!(config.display().width(), DEFAULT_DISPLAY_WIDTH);
    }

    #[test]
    fn parses_sections() {
        let config = Config::parse(
            r#"
            [general]
            show_hidden = true

            [sort]
            key = "size"
            asc = false

            [display]
            width = 10000
            "#,
        );
        assert!(config.general().show_hidden());
        assert!(config.general().dirs_first());
        assert_eq!(config.sort(), SortOrder::new(SortKey::Size, false));
        assert_eq!(config.display().width(), MAX_DISPLAY_WIDTH);
    }

    #[test]
    fn unknown_sort_key_is_unsorted() {
        let config = Config::parse("[sort]\nkey = \"modified\"\n");
        assert_eq!(config.sort().key, SortKey::Unsorted);
        assert!(config.sort().asc);
    }

    #[test]
    fn sort_key_ignores_case() {
        let config = Config::parse("[sort]\nkey = \" Name \"\nasc = false\n");
        assert_eq!(config.sort(), SortOrder::new(SortKey::Name, false));
        let config = Config::parse("[sort]\nkey = \"SIZE\"\n");
        assert_eq!(config.sort().key, SortKey::Size);
    }

    #[test]
    fn narrow_width_is_clamped_to_minimum() {
        let config = Config::parse("[display]\nwidth = 20\n");
        assert_eq!(config.display().width(), crate::utils::MIN_DISPLAY_WIDTH);
    }

    #[test]
    fn invalid_toml_falls_back() {
        let config = Config::parse("[general\ndirs_first = ");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn generated_files_parse() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for minimal in [true, false] {
            let path = dir.path().join(format!("nested/{}.toml", minimal));
            Config::generate_default(&path, minimal)?;
            let config = Config::load_from(&path)?;
            assert_eq!(config, Config::default());

            let err = Config::generate_default(&path, minimal).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        }
        Ok(())
    }
}
