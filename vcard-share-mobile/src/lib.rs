// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard Share Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes the vCard encoder and share payload helpers to the host app,
//! which stays responsible for writing the file and opening the share sheet.

use vcard_share_core::{ContactRecord, ShareConfig};

// === Modules ===

mod error;
mod logging;
mod types;

// Re-export public types
pub use error::MobileError;
pub use logging::{init_logging, DEFAULT_LOG_DIRECTIVE};
pub use types::{MobileContactRecord, MobileShareConfig, MobileShareFile, MobileShareText};

uniffi::setup_scaffolding!();

/// Resolves an optional mobile config, falling back to the defaults.
fn resolve_config(config: Option<MobileShareConfig>) -> Result<ShareConfig, MobileError> {
    match config {
        Some(config) => Ok(ShareConfig::try_from(config)?),
        None => Ok(ShareConfig::default()),
    }
}

// === vCard Encoding ===

/// Encode a contact as vCard 3.0 text (CRLF line endings).
#[uniffi::export]
pub fn generate_vcard(contact: MobileContactRecord) -> String {
    vcard_share_core::export_vcard(&ContactRecord::from(&contact))
}

/// Escape a single value for use in a vCard property.
#[uniffi::export]
pub fn escape_vcard_value(value: String) -> String {
    vcard_share_core::escape_vcard(&value)
}

// === File Names ===

/// Fold text into an ASCII file name segment. Empty input gives empty output.
#[uniffi::export]
pub fn to_ascii_file_name(value: String) -> String {
    vcard_share_core::to_ascii_file_name(&value)
}

/// File name for a contact's vCard using the default config.
#[uniffi::export]
pub fn share_file_name(contact: MobileContactRecord) -> String {
    vcard_share_core::share_file_name(&ContactRecord::from(&contact), &ShareConfig::default())
}

// === Share Payloads ===

/// Returns the default share configuration.
#[uniffi::export]
pub fn default_share_config() -> MobileShareConfig {
    MobileShareConfig::from(&ShareConfig::default())
}

/// Prepare a vCard file attachment.
///
/// The host writes `contents` as UTF-8 under `file_name`, then passes the
/// resulting URI to the share sheet.
#[uniffi::export]
pub fn prepare_file_share(
    contact: MobileContactRecord,
    config: Option<MobileShareConfig>,
) -> Result<MobileShareFile, MobileError> {
    let config = resolve_config(config)?;
    let file = vcard_share_core::prepare_file_share(&ContactRecord::from(&contact), &config)?;
    Ok(MobileShareFile::from(&file))
}

/// Prepare a vCard for sharing as inline text.
#[uniffi::export]
pub fn prepare_text_share(
    contact: MobileContactRecord,
    config: Option<MobileShareConfig>,
) -> Result<MobileShareText, MobileError> {
    let config = resolve_config(config)?;
    let text = vcard_share_core::prepare_text_share(&ContactRecord::from(&contact), &config)?;
    Ok(MobileShareText::from(&text))
}
