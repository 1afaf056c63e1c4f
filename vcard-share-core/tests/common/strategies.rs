// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;
use vcard_share_core::ContactRecord;

/// Strategy for text heavy in vCard-reserved characters.
pub fn reserved_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\\'),
            Just('\n'),
            Just(','),
            Just(';'),
            Just('n'),
            any::<char>(),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for optional free-form field values (empty about a third of the time).
pub fn optional_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), ".{1,30}", reserved_text_strategy()]
}

/// Strategy for names, including accented and empty ones.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z][a-zA-Z' -]{0,19}",
        "[A-Z][a-zéèëöüåçñ]{1,12}",
    ]
}

/// Strategy for semicolon-delimited addresses.
pub fn address_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::collection::vec("[a-zA-Z0-9 ,]{0,12}", 1..7).prop_map(|parts| parts.join(";")),
    ]
}

/// Strategy for whole contact records.
pub fn contact_record_strategy() -> impl Strategy<Value = ContactRecord> {
    (
        name_strategy(),
        name_strategy(),
        optional_value_strategy(),
        optional_value_strategy(),
        optional_value_strategy(),
        address_strategy(),
        optional_value_strategy(),
    )
        .prop_map(|(first, last, phone, email, org, address, website)| {
            ContactRecord::new(&first, &last)
                .with_phone(&phone)
                .with_email(&email)
                .with_organization(&org)
                .with_address(&address)
                .with_website(&website)
        })
}
