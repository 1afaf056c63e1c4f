// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard 3.0 Export (RFC 2426)

use crate::contact_card::ContactRecord;

/// vCard line terminator.
pub const CRLF: &str = "\r\n";

/// Exports a ContactRecord to vCard 3.0 format.
///
/// Line order is fixed. `N` and `FN` are always present; optional fields
/// produce no line at all when empty. Every line, including `END:VCARD`,
/// ends with CRLF.
pub fn export_vcard(record: &ContactRecord) -> String {
    let mut lines = Vec::with_capacity(10);
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());

    let last_name = escape_vcard(record.last_name());
    let first_name = escape_vcard(record.first_name());
    lines.push(format!("N:{};{};;;", last_name, first_name));
    lines.push(format!("FN:{} {}", first_name, last_name).trim().to_string());

    if !record.organization().is_empty() {
        lines.push(format!("ORG:{}", escape_vcard(record.organization())));
    }

    if !record.phone().is_empty() {
        lines.push(format!("TEL;TYPE=CELL:{}", escape_vcard(record.phone())));
    }

    if !record.email().is_empty() {
        lines.push(format!(
            "EMAIL;TYPE=INTERNET:{}",
            escape_vcard(record.email())
        ));
    }

    if !record.address().is_empty() {
        // Split on the raw text, then escape each component.
        let parts: Vec<String> = record.address_parts().map(escape_vcard).collect();
        lines.push(format!("ADR;TYPE=HOME:;;{}", parts.join(";")));
    }

    if !record.website().is_empty() {
        lines.push(format!("URL:{}", escape_vcard(record.website())));
    }

    lines.push("END:VCARD".to_string());

    let mut vcard = lines.join(CRLF);
    vcard.push_str(CRLF);

    tracing::debug!(lines = lines.len(), bytes = vcard.len(), "encoded vCard");
    tracing::trace!(vcard = %vcard, "vCard content");

    vcard
}

/// Escapes a text value for a vCard property.
///
/// Backslash first, then newline, comma and semicolon. Other characters,
/// including `\r` and non-ASCII, pass through untouched. Not idempotent.
pub fn escape_vcard(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Reverses [`escape_vcard`].
///
/// Scans left to right so that `\\n` decodes to a backslash followed by `n`.
/// Unknown escapes and a dangling backslash are kept verbatim.
pub fn unescape_vcard(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(',') => out.push(','),
            Some(';') => out.push(';'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
