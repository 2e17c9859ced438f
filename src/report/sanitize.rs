// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::borrow::Cow;

/// Whether the built-in PDF fonts can draw `c`.
///
/// Their WinAnsi encoder silently drops control characters, the C1 range,
/// NBSP and the soft hyphen, so only printable ASCII and the printable
/// Latin-1 upper half count.
pub fn is_encodable(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA1..=0xAC | 0xAE..=0xFF)
}

/// Invisible or typographic characters with a plain stand-in.
fn substitute(c: char) -> Option<&'static str> {
    let s = match c {
        '\t' | '\n' | '\r' | '\u{a0}' | '\u{2000}'..='\u{200a}' | '\u{202f}' | '\u{3000}' => " ",
        '\u{2018}' | '\u{2019}' | '\u{201a}' => "'",
        '\u{201c}' | '\u{201d}' | '\u{201e}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{2026}' => "...",
        _ => return None,
    };
    Some(s)
}

/// Makes `text` drawable: whitespace and typographic punctuation get plain
/// stand-ins, anything else the fonts cannot encode becomes `placeholder`.
///
/// A placeholder that is itself not encodable falls back to `?`.
pub fn sanitize_text(text: &str, placeholder: char) -> Cow<'_, str> {
    if text.chars().all(is_encodable) {
        return Cow::Borrowed(text);
    }
    let placeholder = if is_encodable(placeholder) {
        placeholder
    } else {
        '?'
    };
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_encodable(c) {
            out.push(c);
        } else if let Some(s) = substitute(c) {
            out.push_str(s);
        } else {
            out.push(placeholder);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        let out = sanitize_text("Groceries, café", '?');
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "Groceries, café");
    }

    #[test]
    fn symbols_become_placeholders() {
        assert_eq!(sanitize_text("Keep saving! [💚]", '?'), "Keep saving! [?]");
        assert_eq!(sanitize_text("chai ☕ x2", '*'), "chai * x2");
    }

    #[test]
    fn unencodable_placeholder_falls_back() {
        assert_eq!(sanitize_text("a→b", '✓'), "a?b");
    }

    #[test]
    fn dropped_code_points_are_made_visible() {
        assert_eq!(sanitize_text("a\u{85}b\tc\u{a0}d", '?'), "a?b c d");
        assert_eq!(sanitize_text("x\u{ad}y\u{7f}z\u{1}", '#'), "x#y#z#");
        assert!(!is_encodable('\u{a0}'));
        assert!(is_encodable('\u{a1}'));
    }

    #[test]
    fn typographic_punctuation_is_flattened() {
        assert_eq!(
            sanitize_text("Ali\u{2019}s \u{201c}tea\u{201d} \u{2013} 2\u{2026}", '?'),
            "Ali's \"tea\" - 2..."
        );
    }

    #[test]
    fn each_char_is_replaced_once() {
        assert_eq!(sanitize_text("🔴🟡", '?'), "??");
    }
}
