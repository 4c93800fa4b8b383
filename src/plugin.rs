//! Plugin metadata: what this exporter contributes to the Oomox theme model,
//! and where its backing script lives.

use std::path::PathBuf;

use crate::error::ExportError;

/// Plugin identifier, also the name of the persisted export config.
pub const PLUGIN_NAME: &str = "spotify";
/// Human-facing plugin name.
pub const DISPLAY_NAME: &str = "Oomoxify";
/// Short description shown in about dialogs.
pub const ABOUT_TEXT: &str = "Apply the current theme to Spotify Desktop app.";
/// Project homepage.
pub const HOMEPAGE_URL: &str = "https://github.com/themix-project/oomoxify/";

/// Environment variable overriding the script location.
pub const SCRIPT_ENV_VAR: &str = "OOMOXIFY_SCRIPT";
/// System install location of the script.
const SYSTEM_SCRIPT_PATH: &str = "/usr/share/oomoxify/oomoxify.sh";

/// An extra color key this plugin adds to the theme model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeModelEntry {
    /// Theme key written by the theme editor.
    pub key: &'static str,
    /// Key to fall back to when the theme doesn't set ours.
    pub fallback_key: &'static str,
    /// Human-facing label.
    pub display_name: &'static str,
}

/// The Spotify-specific color keys, with their fallbacks into the base
/// theme model.
pub fn theme_model_extra() -> Vec<ThemeModelEntry> {
    vec![
        ThemeModelEntry {
            key: "SPOTIFY_PROTO_BG",
            fallback_key: "HDR_BG",
            display_name: "Background",
        },
        ThemeModelEntry {
            key: "SPOTIFY_PROTO_FG",
            fallback_key: "HDR_FG",
            display_name: "Foreground",
        },
        ThemeModelEntry {
            key: "SPOTIFY_PROTO_SEL",
            fallback_key: "SEL_BG",
            display_name: "Accent Color",
        },
    ]
}

/// Locate oomoxify.sh.
///
/// `$OOMOXIFY_SCRIPT` wins when set; otherwise the system install location
/// is used. Existence is checked here so a missing script fails before any
/// config gets persisted for nothing.
pub fn resolve_script_path(override_path: Option<PathBuf>) -> Result<PathBuf, ExportError> {
    let path = override_path
        .or_else(|| std::env::var_os(SCRIPT_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(SYSTEM_SCRIPT_PATH));

    if path.is_file() {
        Ok(path)
    } else {
        Err(ExportError::ScriptNotFound(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_model_keys_and_fallbacks() {
        let entries = theme_model_extra();
        assert_eq!(entries.len(), 3);

        let bg = entries.iter().find(|e| e.key == "SPOTIFY_PROTO_BG").unwrap();
        assert_eq!(bg.fallback_key, "HDR_BG");
        let sel = entries.iter().find(|e| e.key == "SPOTIFY_PROTO_SEL").unwrap();
        assert_eq!(sel.fallback_key, "SEL_BG");
    }

    #[test]
    fn test_explicit_override_must_exist() {
        let err = resolve_script_path(Some(PathBuf::from("/nonexistent/oomoxify.sh"))).unwrap_err();
        assert!(matches!(err, ExportError::ScriptNotFound(_)));
    }

    #[test]
    fn test_existing_override_is_accepted() {
        let path = std::env::temp_dir().join(format!("oomoxify-script-{}.sh", std::process::id()));
        std::fs::write(&path, "#!/usr/bin/env bash\n").unwrap();
        let resolved = resolve_script_path(Some(path.clone())).unwrap();
        assert_eq!(resolved, path);
        let _ = std::fs::remove_file(&path);
    }
}
