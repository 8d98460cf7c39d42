use crate::error::NavError;
use serde::{Deserialize, Serialize};
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

pub const DEFAULT_NAV_SELECTOR: &str = ".nav-item";
pub const DEFAULT_SECTION_SELECTOR: &str = ".section";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_TARGET_ATTRIBUTE: &str = "data-section";

/// How navigation items and sections are discovered and marked.
///
/// Every field is optional in the TOML form; missing keys fall back to the defaults
/// (`.nav-item`, `.section`, `active`, `data-section`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub nav_selector: String,
    pub section_selector: String,
    /// Marker class toggled on the active section and nav item
    pub active_class: String,
    /// Attribute on a nav item holding the id of the section it activates
    pub target_attribute: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            nav_selector: DEFAULT_NAV_SELECTOR.to_string(),
            section_selector: DEFAULT_SECTION_SELECTOR.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            target_attribute: DEFAULT_TARGET_ATTRIBUTE.to_string(),
        }
    }
}

impl NavConfig {
    pub fn from_toml_str(content: &str) -> Result<NavConfig, NavError> {
        let config: NavConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, NavError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), NavError> {
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace)
        {
            return Err(NavError::Config(format!(
                "active_class must be a single class name, got '{}'",
                self.active_class
            )));
        }
        if self.target_attribute.trim().is_empty() {
            return Err(NavError::Config("target_attribute is empty".to_string()));
        }
        Ok(())
    }
}

/// Reads a [`NavConfig`] from a TOML file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfigProvider {
    path: PathBuf,
}

impl TomlConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigProvider { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields the default configuration.
    pub fn load(&self) -> Result<NavConfig, NavError> {
        tracing::debug!("Attempting to read nav config from: {:?}", &self.path);
        if !self.path.exists() {
            tracing::debug!("Config file not found, using defaults.");
            return Ok(NavConfig::default());
        }
        NavConfig::from_toml_str(&get_content(&self.path)?)
    }
}

pub fn get_content<P: AsRef<Path>>(path: P) -> Result<String, NavError> {
    tracing::debug!("Reading {:?}", path.as_ref());
    Ok(read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = NavConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = NavConfig::from_toml_str("active_class = \"is-current\"\n").unwrap();
        assert_eq!(config.active_class, "is-current");
        assert_eq!(config.nav_selector, DEFAULT_NAV_SELECTOR);
        assert_eq!(config.target_attribute, DEFAULT_TARGET_ATTRIBUTE);
    }

    #[test]
    fn rejects_multi_word_marker_class() {
        let err = NavConfig::from_toml_str("active_class = \"is active\"\n").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn toml_round_trip_of_custom_config() {
        let config = NavConfig {
            nav_selector: "a.tab".to_string(),
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(NavConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let provider = TomlConfigProvider::new(dir.path().join("nav.toml"));
        assert_eq!(provider.load().unwrap(), NavConfig::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.toml");
        std::fs::write(&path, "section_selector = \"section.panel\"\n").unwrap();
        let config = TomlConfigProvider::new(path).load().unwrap();
        assert_eq!(config.section_selector, "section.panel");
    }
}
