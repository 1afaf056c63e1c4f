// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ASCII File Names
//!
//! Derives file system safe names for exported vCards.

use unicode_normalization::UnicodeNormalization;

use crate::config::ShareConfig;
use crate::contact_card::ContactRecord;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Folds text into an ASCII identifier usable as a path segment.
///
/// Accented letters lose their diacritics ("José" becomes "Jose"); every
/// other character outside `[A-Za-z0-9_-]` becomes `_`. Empty input gives
/// empty output, so callers pick their own fallback.
pub fn to_ascii_file_name(s: &str) -> String {
    s.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| if is_file_name_char(c) { c } else { '_' })
        .collect()
}

/// Returns true for characters kept as-is by [`to_ascii_file_name`].
pub fn is_file_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Builds `<first>_<last>.<ext>` for a record.
///
/// A name part that sanitizes to nothing is replaced by the matching
/// fallback from `config`.
pub fn share_file_name(record: &ContactRecord, config: &ShareConfig) -> String {
    let first = to_ascii_file_name(record.first_name());
    let last = to_ascii_file_name(record.last_name());

    let first = if first.is_empty() {
        config.first_name_fallback()
    } else {
        &first
    };
    let last = if last.is_empty() {
        config.last_name_fallback()
    } else {
        &last
    };

    format!("{}_{}.{}", first, last, config.file_extension())
}
