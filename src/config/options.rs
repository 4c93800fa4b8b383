//! Option keys and values for the Spotify export config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config key for the Spotify install directory the script patches.
pub const OPTION_SPOTIFY_PATH: &str = "spotify_path";
/// Config key for the custom font family name.
pub const OPTION_FONT_NAME: &str = "font_name";
/// Config key for the selected font mode.
pub const OPTION_FONT_OPTIONS: &str = "font_options";

/// Name of the persisted config this plugin owns.
pub const CONFIG_NAME: &str = "spotify";

/// Default values seeded into the store on first use.
pub fn default_config() -> Vec<(&'static str, &'static str)> {
    vec![
        (OPTION_SPOTIFY_PATH, "/usr/share/spotify/Apps"),
        (OPTION_FONT_NAME, "sans-serif"),
        (OPTION_FONT_OPTIONS, FontMode::Default.as_str()),
    ]
}

/// Font handling mode - determines how the script alters Spotify's fonts.
///
/// Exactly one mode is active at a time; the modes are mutually exclusive
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontMode {
    /// Leave fonts untouched.
    Default,
    /// Normalize font weight heuristically; no font name needed.
    Normalize,
    /// Use a specific font family supplied by the user.
    Custom,
}

impl FontMode {
    /// The value persisted in the export config for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Normalize => "normalize",
            Self::Custom => "custom",
        }
    }

    /// Parse a persisted config value back into a mode.
    ///
    /// Anything other than the three known values is treated as config
    /// corruption and surfaced, never silently mapped to `Default`.
    pub fn parse_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "default" => Ok(Self::Default),
            "normalize" => Ok(Self::Normalize),
            "custom" => Ok(Self::Custom),
            other => Err(ConfigError::InvalidValue {
                key: OPTION_FONT_OPTIONS.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Get the display name for this mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Don't change default font",
            Self::Normalize => "Normalize font weight",
            Self::Custom => "Use custom font",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_mode_roundtrip() {
        for mode in [FontMode::Default, FontMode::Normalize, FontMode::Custom] {
            assert_eq!(FontMode::parse_str(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn test_font_mode_parse_invalid() {
        let err = FontMode::parse_str("bold").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, ref value }
                if key == OPTION_FONT_OPTIONS && value == "bold"
        ));
    }

    #[test]
    fn test_font_mode_parse_empty() {
        assert!(FontMode::parse_str("").is_err());
    }

    #[test]
    fn test_default_config_covers_all_keys() {
        let defaults = default_config();
        for key in [OPTION_SPOTIFY_PATH, OPTION_FONT_NAME, OPTION_FONT_OPTIONS] {
            assert!(defaults.iter().any(|(k, _)| *k == key));
        }
    }

    #[test]
    fn test_default_config_values() {
        let defaults = default_config();
        let get = |key| {
            defaults
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .unwrap()
        };
        assert_eq!(get(OPTION_SPOTIFY_PATH), "/usr/share/spotify/Apps");
        assert_eq!(get(OPTION_FONT_NAME), "sans-serif");
        assert_eq!(get(OPTION_FONT_OPTIONS), "default");
    }
}
