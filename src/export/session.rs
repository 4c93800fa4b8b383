//! Transient export state and the commit-then-build step.
//!
//! The front-end edits a session object instead of writing to the persisted
//! store on every input event; one explicit commit writes the fields back and
//! saves, right before the invocation is built. A failed export therefore
//! never loses the user's settings.

use std::path::Path;

use crate::config::{
    ExportConfig, FontMode, OPTION_FONT_NAME, OPTION_FONT_OPTIONS, OPTION_SPOTIFY_PATH,
};
use crate::error::ConfigError;
use crate::export::invocation::{ExportInvocation, FLAG_FONT, FLAG_FONT_WEIGHT};

/// In-memory state for one export dialog/CLI run.
///
/// Holds the three user-editable fields, initialized from the persisted
/// config. Exactly one font mode is active at any time; switching modes
/// preserves the custom font name so re-selecting `custom` restores it.
#[derive(Debug, Clone)]
pub struct ExportSession {
    spotify_path: String,
    font_name: String,
    font_mode: FontMode,
}

impl ExportSession {
    /// Initialize the session from the persisted config.
    ///
    /// Fails fast if a required key is absent or the persisted font mode is
    /// not a known value.
    pub fn from_config(config: &ExportConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            spotify_path: config.get(OPTION_SPOTIFY_PATH)?.to_string(),
            font_name: config.get(OPTION_FONT_NAME)?.to_string(),
            font_mode: FontMode::parse_str(config.get(OPTION_FONT_OPTIONS)?)?,
        })
    }

    /// Select a font mode, deselecting whichever was active before.
    pub fn select_mode(&mut self, mode: FontMode) {
        self.font_mode = mode;
    }

    /// The currently active font mode.
    pub fn font_mode(&self) -> FontMode {
        self.font_mode
    }

    /// Whether the font-name field should accept edits.
    ///
    /// Only meaningful while `custom` is active; keeping it read-only in the
    /// other modes prevents a stale name from looking authoritative.
    pub fn font_name_editable(&self) -> bool {
        self.font_mode == FontMode::Custom
    }

    /// Current font name, preserved across mode switches.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn set_font_name(&mut self, name: impl Into<String>) {
        self.font_name = name.into();
    }

    /// Current Spotify install path.
    pub fn spotify_path(&self) -> &str {
        &self.spotify_path
    }

    pub fn set_spotify_path(&mut self, path: impl Into<String>) {
        self.spotify_path = path.into();
    }

    /// Write the session's fields into the config and save it.
    pub fn commit(&self, config: &mut ExportConfig) -> Result<(), ConfigError> {
        config.set(OPTION_SPOTIFY_PATH, self.spotify_path.clone());
        config.set(OPTION_FONT_NAME, self.font_name.clone());
        config.set(OPTION_FONT_OPTIONS, self.font_mode.as_str());
        config.save()?;
        tracing::debug!(
            mode = self.font_mode.as_str(),
            "Committed export config '{}'",
            config.name()
        );
        Ok(())
    }

    /// Persist the current field values, then build the invocation for the
    /// given theme artifact.
    ///
    /// The commit happens before building and before returning, so the
    /// script runs with exactly the values the user last saw, and they
    /// survive even if the export itself fails afterwards. Given unchanged
    /// state, building is pure: two calls yield identical token lists.
    pub fn build(
        &self,
        script_path: &Path,
        theme_path: &Path,
        config: &mut ExportConfig,
    ) -> Result<ExportInvocation, ConfigError> {
        self.commit(config)?;

        let invocation = ExportInvocation::new(script_path, theme_path, &self.spotify_path);
        let invocation = match self.font_mode {
            FontMode::Default => invocation,
            FontMode::Normalize => invocation.flag(FLAG_FONT_WEIGHT),
            FontMode::Custom => invocation.flag_value(FLAG_FONT, &self.font_name),
        };
        Ok(invocation)
    }
}
