// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-Based Tests
//!
//! Uses proptest to verify properties that should hold for all inputs,
//! not just specific test cases.

mod common;

use common::strategies::{contact_record_strategy, reserved_text_strategy};
use proptest::prelude::*;
use vcard_share_core::{escape_vcard, export_vcard, unescape_vcard};

// ============================================================
// Escaping Properties
// ============================================================

proptest! {
    /// Property: unescaping recovers the original text
    #[test]
    fn prop_escape_roundtrip(text in reserved_text_strategy()) {
        prop_assert_eq!(unescape_vcard(&escape_vcard(&text)), text);
    }

    /// Property: escaped text has no bare delimiters or newlines
    #[test]
    fn prop_escaped_has_no_bare_delimiters(text in reserved_text_strategy()) {
        let escaped = escape_vcard(&text);
        prop_assert!(!escaped.contains('\n'));

        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let next = chars.next();
                prop_assert!(matches!(next, Some('\\' | 'n' | ',' | ';')));
            } else {
                prop_assert!(c != ',' && c != ';');
            }
        }
    }

    /// Property: text without reserved characters is unchanged
    #[test]
    fn prop_plain_text_unchanged(text in "[^\\\\\n,;]{0,40}") {
        prop_assert_eq!(escape_vcard(&text), text);
    }
}

// ============================================================
// Encoder Properties
// ============================================================

proptest! {
    /// Property: every vCard is framed by BEGIN and END lines
    #[test]
    fn prop_vcard_framing(record in contact_record_strategy()) {
        let vcard = export_vcard(&record);
        prop_assert!(vcard.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\nN:"));
        prop_assert!(vcard.ends_with("END:VCARD\r\n"));
    }

    /// Property: N and FN are always present, optional lines match field presence
    #[test]
    fn prop_line_presence(record in contact_record_strategy()) {
        let vcard = export_vcard(&record);
        let lines: Vec<&str> = vcard.trim_end_matches("\r\n").split("\r\n").collect();

        prop_assert!(lines.iter().any(|l| l.starts_with("N:")));
        prop_assert!(lines.iter().any(|l| l.starts_with("FN:")));

        let checks = [
            ("ORG:", record.organization()),
            ("TEL;TYPE=CELL:", record.phone()),
            ("EMAIL;TYPE=INTERNET:", record.email()),
            ("ADR;TYPE=HOME:", record.address()),
            ("URL:", record.website()),
        ];
        for (prefix, value) in checks {
            let count = lines.iter().filter(|l| l.starts_with(prefix)).count();
            prop_assert_eq!(count, usize::from(!value.is_empty()));
        }
    }

    /// Property: the address line carries one component per raw part
    #[test]
    fn prop_address_components(record in contact_record_strategy()) {
        prop_assume!(!record.address().is_empty());
        let vcard = export_vcard(&record);
        let line = vcard
            .split("\r\n")
            .find(|l| l.starts_with("ADR;TYPE=HOME:"))
            .unwrap();
        let value = line.trim_start_matches("ADR;TYPE=HOME:");
        let expected: Vec<String> = std::iter::once(String::new())
            .chain(std::iter::once(String::new()))
            .chain(record.address_parts().map(escape_vcard))
            .collect();
        prop_assert_eq!(value, expected.join(";"));
    }

    /// Property: encoding is deterministic
    #[test]
    fn prop_encoding_deterministic(record in contact_record_strategy()) {
        prop_assert_eq!(export_vcard(&record), export_vcard(&record));
    }
}
