// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly data types.

use vcard_share_core::{ConfigError, ContactRecord, ShareConfig, ShareFile, ShareText};

/// Mobile-friendly contact record, as collected by the share form.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct MobileContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub organization: String,
    /// Semicolon-delimited: street;apt;city;state;postal;country.
    pub address: String,
    pub website: String,
}

impl From<&MobileContactRecord> for ContactRecord {
    fn from(record: &MobileContactRecord) -> Self {
        ContactRecord::new(&record.first_name, &record.last_name)
            .with_phone(&record.phone)
            .with_email(&record.email)
            .with_organization(&record.organization)
            .with_address(&record.address)
            .with_website(&record.website)
    }
}

impl From<&ContactRecord> for MobileContactRecord {
    fn from(record: &ContactRecord) -> Self {
        MobileContactRecord {
            first_name: record.first_name().to_string(),
            last_name: record.last_name().to_string(),
            phone: record.phone().to_string(),
            email: record.email().to_string(),
            organization: record.organization().to_string(),
            address: record.address().to_string(),
            website: record.website().to_string(),
        }
    }
}

/// Mobile-friendly share configuration.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileShareConfig {
    pub first_name_fallback: String,
    pub last_name_fallback: String,
    pub file_extension: String,
    pub mime_type: String,
    pub file_dialog_title: String,
    pub text_dialog_title: String,
}

impl From<&ShareConfig> for MobileShareConfig {
    fn from(config: &ShareConfig) -> Self {
        MobileShareConfig {
            first_name_fallback: config.first_name_fallback().to_string(),
            last_name_fallback: config.last_name_fallback().to_string(),
            file_extension: config.file_extension().to_string(),
            mime_type: config.mime_type().to_string(),
            file_dialog_title: config.file_dialog_title().to_string(),
            text_dialog_title: config.text_dialog_title().to_string(),
        }
    }
}

impl TryFrom<MobileShareConfig> for ShareConfig {
    type Error = ConfigError;

    fn try_from(config: MobileShareConfig) -> Result<Self, Self::Error> {
        ShareConfig::builder()
            .first_name_fallback(config.first_name_fallback)
            .last_name_fallback(config.last_name_fallback)
            .file_extension(config.file_extension)
            .mime_type(config.mime_type)
            .file_dialog_title(config.file_dialog_title)
            .text_dialog_title(config.text_dialog_title)
            .build()
    }
}

/// A vCard ready to be written to the cache directory and shared as a file.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileShareFile {
    pub file_name: String,
    pub mime_type: String,
    /// UTF-8 vCard text to write.
    pub contents: String,
    /// Size in bytes once written as UTF-8.
    pub size: u64,
    pub title: String,
    pub dialog_title: String,
}

impl From<&ShareFile> for MobileShareFile {
    fn from(file: &ShareFile) -> Self {
        MobileShareFile {
            file_name: file.file_name().to_string(),
            mime_type: file.mime_type().to_string(),
            contents: file.contents().to_string(),
            size: file.size() as u64,
            title: file.title().to_string(),
            dialog_title: file.dialog_title().to_string(),
        }
    }
}

/// A vCard shared as plain text.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileShareText {
    pub text: String,
    pub title: String,
    pub dialog_title: String,
}

impl From<&ShareText> for MobileShareText {
    fn from(text: &ShareText) -> Self {
        MobileShareText {
            text: text.text().to_string(),
            title: text.title().to_string(),
            dialog_title: text.dialog_title().to_string(),
        }
    }
}
