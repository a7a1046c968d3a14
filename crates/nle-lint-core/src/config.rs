//! Configuration model for the two diagnostic classes.
//!
//! The host-facing surface is [`ConfigOverrides`]: two tri-state toggles
//! plus two hard-disable overrides, loadable from TOML. One resolution pass
//! at run start produces a [`CheckConfig`], a plain `Copy` snapshot that is
//! threaded through every scan call. Scanning never consults global state,
//! so independent units may be scanned on separate threads against their
//! own snapshots.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolved, immutable per-scan configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Whether comment scanning (NLE001) is enabled.
    pub comments_enabled: bool,
    /// Whether string-literal scanning (NLE002) is enabled.
    pub strings_enabled: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            comments_enabled: true,
            strings_enabled: false,
        }
    }
}

impl CheckConfig {
    /// Creates the default configuration: comments on, strings off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolves one diagnostic class's enable state.
///
/// Precedence, highest to lowest: hard disable, explicit toggle, default.
#[must_use]
pub fn resolve(disable: bool, toggle: Option<bool>, default: bool) -> bool {
    if disable {
        return false;
    }
    toggle.unwrap_or(default)
}

/// Host-facing layered configuration surface.
///
/// Unset toggles fall through to the defaults in [`CheckConfig`]; the
/// `disable_*` overrides win over everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    /// Tri-state toggle for comment scanning.
    #[serde(default)]
    pub comments: Option<bool>,

    /// Tri-state toggle for string-literal scanning.
    #[serde(default)]
    pub strings: Option<bool>,

    /// Hard disable for comment scanning; beats an explicit enable.
    #[serde(default)]
    pub disable_comments: bool,

    /// Hard disable for string-literal scanning; beats an explicit enable.
    #[serde(default)]
    pub disable_strings: bool,
}

impl ConfigOverrides {
    /// Creates an empty override set (everything unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads overrides from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses overrides from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Applies precedence per class and produces the scan snapshot.
    #[must_use]
    pub fn resolve(&self) -> CheckConfig {
        let defaults = CheckConfig::default();
        CheckConfig {
            comments_enabled: resolve(
                self.disable_comments,
                self.comments,
                defaults.comments_enabled,
            ),
            strings_enabled: resolve(self.disable_strings, self.strings, defaults.strings_enabled),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_comments_on_strings_off() {
        let config = CheckConfig::default();
        assert!(config.comments_enabled);
        assert!(!config.strings_enabled);
    }

    #[test]
    fn unset_overrides_resolve_to_defaults() {
        let resolved = ConfigOverrides::new().resolve();
        assert_eq!(resolved, CheckConfig::default());
    }

    #[test]
    fn explicit_toggle_beats_default() {
        assert!(resolve(false, Some(true), false));
        assert!(!resolve(false, Some(false), true));
    }

    #[test]
    fn hard_disable_beats_explicit_enable() {
        assert!(!resolve(true, Some(true), true));
    }

    #[test]
    fn unset_toggle_falls_through_to_default() {
        assert!(resolve(false, None, true));
        assert!(!resolve(false, None, false));
    }

    #[test]
    fn resolve_applies_per_class_independently() {
        let overrides = ConfigOverrides {
            strings: Some(true),
            disable_comments: true,
            ..ConfigOverrides::default()
        };
        let resolved = overrides.resolve();
        assert!(!resolved.comments_enabled);
        assert!(resolved.strings_enabled);
    }

    #[test]
    fn parse_toml_overrides() {
        let toml = r#"
strings = true
disable_comments = true
"#;
        let overrides = ConfigOverrides::parse(toml).expect("Failed to parse");
        assert_eq!(overrides.strings, Some(true));
        assert!(overrides.disable_comments);
        assert_eq!(overrides.comments, None);
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let result = ConfigOverrides::parse("strings = ");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
