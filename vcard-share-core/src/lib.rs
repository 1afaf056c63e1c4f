// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard Share Core Library
//!
//! Encodes contact records as vCard 3.0 text and prepares the payloads a
//! mobile share sheet needs. Everything here is pure: no file or network I/O.

pub mod config;
pub mod contact_card;
pub mod share;

pub use config::{ConfigError, ShareConfig, ShareConfigBuilder};
pub use contact_card::filename::{share_file_name, to_ascii_file_name};
pub use contact_card::vcard::{escape_vcard, export_vcard, unescape_vcard};
pub use contact_card::ContactRecord;
pub use share::{prepare_file_share, prepare_text_share, ShareFile, SharePayload, ShareText};
