//! Element ids, storage key and media query the page scripts bind to
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_progress_id")]
    pub progress_id: String,
    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_theme_attribute")]
    pub theme_attribute: String,
    #[serde(default = "default_dark_query")]
    pub dark_query: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid theme attribute name: {0:?}")]
    InvalidAttribute(String),
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            progress_id: default_progress_id(),
            toggle_id: default_toggle_id(),
            storage_key: default_storage_key(),
            theme_attribute: default_theme_attribute(),
            dark_query: default_dark_query(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object of string fields, or
    /// if it fails [`SiteConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that `theme_attribute` is a name the DOM accepts in `setAttribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAttribute`] for an empty name or one
    /// outside the XML `Name` production.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_attribute_name(&self.theme_attribute) {
            Ok(())
        } else {
            Err(ConfigError::InvalidAttribute(self.theme_attribute.clone()))
        }
    }
}

fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii();
    start(first) && chars.all(|c| start(c) || c.is_ascii_digit() || c == '-' || c == '.')
}

fn default_progress_id() -> String {
    "progress".to_string()
}

fn default_toggle_id() -> String {
    "theme-toggle".to_string()
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_theme_attribute() -> String {
    "data-theme".to_string()
}

fn default_dark_query() -> String {
    "(prefers-color-scheme: dark)".to_string()
}
