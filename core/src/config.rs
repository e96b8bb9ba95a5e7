//! # HANDLER CONFIGURATION
//!
//! Optional JSON file named by `FORMECHO_CONFIG`. Every field has a default,
//! so an absent file and an empty object `{}` behave the same.

use crate::context::Environment;
use crate::errors::FormEchoError;
use crate::validation::error_codes;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable holding the configuration file path.
pub const CONFIG_PATH_VAR: &str = "FORMECHO_CONFIG";

pub const DEFAULT_STYLESHEET: &str = "/assets/css/styles.css";

/// Per-field fallbacks for the three tracked form fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldDefaults {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields default to the empty string.
    pub fn blank() -> Self {
        Self::new("", "", "")
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self::blank()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandlerConfig {
    /// HTML-escape interpolated request values.
    pub escape_html: bool,
    /// Largest accepted `CONTENT_LENGTH`. A request declaring more is handled
    /// as if it had no body. Unlimited when unset.
    pub max_body_size: Option<u64>,
    pub stylesheet: String,
    /// Replaces the variant's own field defaults when set.
    pub field_defaults: Option<FieldDefaults>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            max_body_size: None,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            field_defaults: None,
        }
    }
}

impl HandlerConfig {
    /// Loads the file named by [`CONFIG_PATH_VAR`], or returns the defaults
    /// when the variable is unset or empty.
    pub fn load<E: Environment + ?Sized>(env: &E) -> Result<Self, FormEchoError> {
        match env.var(CONFIG_PATH_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormEchoError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| FormEchoError::Config {
            code: error_codes::CONFIG_UNREADABLE,
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, FormEchoError> {
        serde_json::from_str(json).map_err(|e| FormEchoError::Config {
            code: error_codes::CONFIG_INVALID,
            message: format!("Invalid configuration: {}", e),
        })
    }
}
