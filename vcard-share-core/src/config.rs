// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Share Configuration
//!
//! Naming and labelling used when packaging a vCard for the share sheet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact_card::filename::to_ascii_file_name;

/// Default first-name stand-in for file names.
pub const DEFAULT_FIRST_NAME_FALLBACK: &str = "Contact";

/// Default last-name stand-in for file names.
pub const DEFAULT_LAST_NAME_FALLBACK: &str = "VCard";

/// Default extension for exported files.
pub const DEFAULT_FILE_EXTENSION: &str = "vcf";

/// MIME type registered for vCard (RFC 6350 section 10.1).
pub const DEFAULT_MIME_TYPE: &str = "text/vcard";

pub const DEFAULT_FILE_DIALOG_TITLE: &str = "Share contact";

pub const DEFAULT_TEXT_DIALOG_TITLE: &str = "Share contact (as text)";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Fallback for {field} cannot be empty")]
    EmptyFallback { field: &'static str },
    #[error("Fallback for {field} is not a safe file name: {value:?}")]
    UnsafeFallback { field: &'static str, value: String },
    #[error("Invalid file extension: {0:?}")]
    InvalidExtension(String),
    #[error("MIME type cannot be empty")]
    EmptyMimeType,
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for share payload preparation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    first_name_fallback: String,
    last_name_fallback: String,
    file_extension: String,
    mime_type: String,
    file_dialog_title: String,
    text_dialog_title: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            first_name_fallback: DEFAULT_FIRST_NAME_FALLBACK.to_string(),
            last_name_fallback: DEFAULT_LAST_NAME_FALLBACK.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            file_dialog_title: DEFAULT_FILE_DIALOG_TITLE.to_string(),
            text_dialog_title: DEFAULT_TEXT_DIALOG_TITLE.to_string(),
        }
    }
}

impl ShareConfig {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> ShareConfigBuilder {
        ShareConfigBuilder::default()
    }

    /// Parses and validates a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ShareConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration produces well-formed file names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fallback("first_name_fallback", &self.first_name_fallback)?;
        validate_fallback("last_name_fallback", &self.last_name_fallback)?;

        if self.file_extension.is_empty()
            || !self.file_extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidExtension(self.file_extension.clone()));
        }

        if self.mime_type.trim().is_empty() {
            return Err(ConfigError::EmptyMimeType);
        }

        Ok(())
    }

    pub fn first_name_fallback(&self) -> &str {
        &self.first_name_fallback
    }

    pub fn last_name_fallback(&self) -> &str {
        &self.last_name_fallback
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_dialog_title(&self) -> &str {
        &self.file_dialog_title
    }

    pub fn text_dialog_title(&self) -> &str {
        &self.text_dialog_title
    }
}

/// A fallback is used verbatim in file names, so sanitizing must not alter it.
fn validate_fallback(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyFallback { field });
    }
    if to_ascii_file_name(value) != value {
        return Err(ConfigError::UnsafeFallback {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Builder for [`ShareConfig`].
#[derive(Debug, Default)]
pub struct ShareConfigBuilder {
    config: ShareConfig,
}

impl ShareConfigBuilder {
    pub fn first_name_fallback(mut self, value: impl Into<String>) -> Self {
        self.config.first_name_fallback = value.into();
        self
    }

    pub fn last_name_fallback(mut self, value: impl Into<String>) -> Self {
        self.config.last_name_fallback = value.into();
        self
    }

    pub fn file_extension(mut self, value: impl Into<String>) -> Self {
        self.config.file_extension = value.into();
        self
    }

    pub fn mime_type(mut self, value: impl Into<String>) -> Self {
        self.config.mime_type = value.into();
        self
    }

    pub fn file_dialog_title(mut self, value: impl Into<String>) -> Self {
        self.config.file_dialog_title = value.into();
        self
    }

    pub fn text_dialog_title(mut self, value: impl Into<String>) -> Self {
        self.config.text_dialog_title = value.into();
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<ShareConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
