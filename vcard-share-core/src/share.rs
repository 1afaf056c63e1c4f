// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Share Payloads
//!
//! Packages an encoded vCard for the platform share sheet, either as a file
//! artifact or as inline text. Writing the file and invoking the share sheet
//! are left to the caller.

use crate::config::{ConfigError, ShareConfig};
use crate::contact_card::filename::share_file_name;
use crate::contact_card::vcard::export_vcard;
use crate::contact_card::ContactRecord;

/// A vCard to be written to disk and shared as an attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFile {
    file_name: String,
    mime_type: String,
    contents: String,
    title: String,
    dialog_title: String,
}

impl ShareFile {
    /// ASCII file name including the extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The encoded vCard.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// UTF-8 bytes to write. The caller owns the charset at rest.
    pub fn bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Size in bytes of the file once written.
    pub fn size(&self) -> usize {
        self.contents.len()
    }

    /// Share sheet title (the contact's full name).
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dialog_title(&self) -> &str {
        &self.dialog_title
    }
}

/// A vCard shared as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareText {
    text: String,
    title: String,
    dialog_title: String,
}

impl ShareText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dialog_title(&self) -> &str {
        &self.dialog_title
    }
}

/// Either form of share payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SharePayload {
    File(ShareFile),
    Text(ShareText),
}

impl SharePayload {
    /// The encoded vCard carried by the payload.
    pub fn vcard(&self) -> &str {
        match self {
            SharePayload::File(file) => file.contents(),
            SharePayload::Text(text) => text.text(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SharePayload::File(file) => file.title(),
            SharePayload::Text(text) => text.title(),
        }
    }
}

impl From<ShareFile> for SharePayload {
    fn from(file: ShareFile) -> Self {
        SharePayload::File(file)
    }
}

impl From<ShareText> for SharePayload {
    fn from(text: ShareText) -> Self {
        SharePayload::Text(text)
    }
}

/// Prepares a file attachment for `record`.
pub fn prepare_file_share(
    record: &ContactRecord,
    config: &ShareConfig,
) -> Result<ShareFile, ConfigError> {
    config.validate()?;

    let file = ShareFile {
        file_name: share_file_name(record, config),
        mime_type: config.mime_type().to_string(),
        contents: export_vcard(record),
        title: record.full_name(),
        dialog_title: config.file_dialog_title().to_string(),
    };

    tracing::debug!(
        file_name = %file.file_name,
        size = file.size(),
        mime_type = %file.mime_type,
        "prepared vCard file share"
    );

    Ok(file)
}

/// Prepares an inline text share for `record`.
pub fn prepare_text_share(
    record: &ContactRecord,
    config: &ShareConfig,
) -> Result<ShareText, ConfigError> {
    config.validate()?;

    let text = ShareText {
        text: export_vcard(record),
        title: record.full_name(),
        dialog_title: config.text_dialog_title().to_string(),
    };

    tracing::debug!(size = text.text.len(), "prepared vCard text share");

    Ok(text)
}
