// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Record Module
//!
//! Holds the contact record collected from the share form, plus the vCard
//! encoder and file name helpers that consume it.

pub mod filename;
pub mod vcard;

use serde::{Deserialize, Serialize};

/// A contact as entered in the share form.
///
/// Every field is optional and defaults to empty. The record is an immutable
/// input to the encoder; the UI layer builds a new one per submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    organization: String,
    /// Semicolon-delimited: street;apt;city;state;postal;country.
    address: String,
    website: String,
}

impl ContactRecord {
    /// Creates a record with only a first and last name.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        ContactRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organization = organization.to_string();
        self
    }

    /// Sets the address from its semicolon-delimited form.
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_website(mut self, website: &str) -> Self {
        self.website = website.to_string();
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the raw address components in order, split on every `;`.
    pub fn address_parts(&self) -> impl Iterator<Item = &str> {
        self.address.split(';')
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    /// Returns "first last" with surrounding whitespace trimmed.
    ///
    /// Unescaped; meant for share sheet titles, not vCard content.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone,
            &self.email,
            &self.organization,
            &self.address,
            &self.website,
        ]
        .iter()
        .all(|f| f.is_empty())
    }
}
