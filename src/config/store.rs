//! Persisted export configuration store.
//!
//! Each export plugin owns one named config: a flat string-to-string mapping
//! stored as TOML under the user's config directory. Missing keys are seeded
//! from a default mapping at load time, so every key the export core reads is
//! guaranteed to be present.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// A named, persisted key-value settings store.
///
/// Reads and writes happen in memory; `save()` performs the one write to
/// disk. The store is passed explicitly to the components that need it
/// rather than living in a global.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    name: String,
    path: PathBuf,
    values: BTreeMap<String, String>,
}

/// Get the directory export configs are stored in.
fn export_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("oomox").join("export-config"))
}

impl ExportConfig {
    /// Load the named config from the default location, seeding missing keys
    /// from `defaults`.
    pub fn load(name: &str, defaults: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let dir = export_config_dir().ok_or(ConfigError::NoDirFound)?;
        Self::load_from(&dir, name, defaults)
    }

    /// Load the named config from an explicit base directory.
    ///
    /// The file does not have to exist yet; a fresh store starts out holding
    /// exactly the default mapping.
    pub fn load_from(
        dir: &Path,
        name: &str,
        defaults: &[(&str, &str)],
    ) -> Result<Self, ConfigError> {
        let path = dir.join(format!("{name}.toml"));

        let mut values: BTreeMap<String, String> = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(ConfigError::ReadFailed)?;
            let parsed = toml::from_str(&content).map_err(ConfigError::ParseFailed)?;
            tracing::info!("Loaded export config '{}' from {:?}", name, path);
            parsed
        } else {
            tracing::debug!("Export config '{}' not found at {:?}, using defaults", name, path);
            BTreeMap::new()
        };

        for (key, value) in defaults {
            values
                .entry((*key).to_string())
                .or_insert_with(|| (*value).to_string());
        }

        Ok(Self {
            name: name.to_string(),
            path,
            values,
        })
    }

    /// The config name this store was constructed with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read a value.
    ///
    /// Fails fast on a missing key; every key the export core reads is part
    /// of the default mapping, so absence means a bug, not user error.
    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Set a value in memory. Takes effect on disk at the next `save()`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Persist the current state to disk, creating the config directory if
    /// needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(ConfigError::SaveFailed)?;
        }

        let content =
            toml::to_string_pretty(&self.values).map_err(ConfigError::SerializeFailed)?;
        std::fs::write(&self.path, content).map_err(ConfigError::SaveFailed)?;
        tracing::debug!("Saved export config '{}' to {:?}", self.name, self.path);
        Ok(())
    }

    /// Iterate over all key-value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
