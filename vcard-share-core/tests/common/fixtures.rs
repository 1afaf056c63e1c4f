// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use vcard_share_core::ContactRecord;

/// The sample contact the share form is pre-filled with.
pub fn john_doe() -> ContactRecord {
    ContactRecord::new("John", "Doe")
        .with_phone("+1234567890")
        .with_email("john.doe@example.com")
        .with_organization("Acme Corp")
        .with_address("123 Main St;Apt 4;New York;NY;10001;USA")
        .with_website("https://example.com")
}

/// Expected vCard for [`john_doe`].
pub const JOHN_DOE_VCARD: &str = "BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;John;;;\r\n\
FN:John Doe\r\n\
ORG:Acme Corp\r\n\
TEL;TYPE=CELL:+1234567890\r\n\
EMAIL;TYPE=INTERNET:john.doe@example.com\r\n\
ADR;TYPE=HOME:;;123 Main St;Apt 4;New York;NY;10001;USA\r\n\
URL:https://example.com\r\n\
END:VCARD\r\n";

/// Expected vCard for a record with every field empty.
pub const EMPTY_VCARD: &str = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:;;;;\r\nFN:\r\nEND:VCARD\r\n";
