//! Text encoding for PDF literal strings.
//!
//! Text is written in WinAnsiEncoding, the encoding declared on the font.
//! Characters outside it are transliterated: Unicode compatibility
//! decomposition with combining marks dropped, then a short table of
//! typographic fallbacks, then `?`. Literal strings escape every byte
//! outside printable ASCII as octal, so serialized content is pure ASCII
//! and its length in bytes equals its length in characters.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Text encoded to WinAnsi bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    /// WinAnsi bytes
    pub bytes: Vec<u8>,

    /// Characters that had no WinAnsi code point and were transliterated
    pub replaced: usize,
}

/// Map a character to its WinAnsiEncoding byte, if it has one.
pub fn winansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => {
            let byte = match ch {
                '\u{20AC}' => 0x80,
                '\u{201A}' => 0x82,
                '\u{0192}' => 0x83,
                '\u{201E}' => 0x84,
                '\u{2026}' => 0x85,
                '\u{2020}' => 0x86,
                '\u{2021}' => 0x87,
                '\u{02C6}' => 0x88,
                '\u{2030}' => 0x89,
                '\u{0160}' => 0x8A,
                '\u{2039}' => 0x8B,
                '\u{0152}' => 0x8C,
                '\u{017D}' => 0x8E,
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201C}' => 0x93,
                '\u{201D}' => 0x94,
                '\u{2022}' => 0x95,
                '\u{2013}' => 0x96,
                '\u{2014}' => 0x97,
                '\u{02DC}' => 0x98,
                '\u{2122}' => 0x99,
                '\u{0161}' => 0x9A,
                '\u{203A}' => 0x9B,
                '\u{0153}' => 0x9C,
                '\u{017E}' => 0x9E,
                '\u{0178}' => 0x9F,
                _ => return None,
            };
            Some(byte)
        }
    }
}

/// ASCII stand-ins for common symbols with no WinAnsi code point.
fn fallback(ch: char) -> Option<&'static str> {
    let s = match ch {
        '\u{2265}' => ">=",
        '\u{2264}' => "<=",
        '\u{2260}' => "!=",
        '\u{2192}' => "->",
        '\u{2190}' => "<-",
        '\u{2191}' => "^",
        '\u{2193}' => "v",
        '\u{2212}' => "-",
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2015}' => "-",
        '\u{2032}' => "'",
        '\u{2033}' => "\"",
        '\u{2713}' | '\u{2714}' => "v",
        '\u{2717}' | '\u{2718}' => "x",
        '\u{25CF}' | '\u{25E6}' | '\u{2043}' => "*",
        '\u{2009}' | '\u{200A}' | '\u{202F}' | '\u{2002}' | '\u{2003}' => " ",
        _ => return None,
    };
    Some(s)
}

/// Encode text to WinAnsi, transliterating what the encoding lacks.
pub fn encode_text(text: &str) -> EncodedText {
    let mut out = EncodedText::default();

    for ch in text.chars() {
        if ch.is_control() {
            out.bytes.push(b' ');
            continue;
        }
        if let Some(byte) = winansi_byte(ch) {
            out.bytes.push(byte);
            continue;
        }

        out.replaced += 1;
        if let Some(s) = fallback(ch) {
            out.bytes.extend_from_slice(s.as_bytes());
            continue;
        }

        // e.g. "ő" decomposes to "o" + U+030B; "ﬁ" to "fi"
        let mut decomposed = Vec::new();
        let mut encodable = true;
        for d in std::iter::once(ch).nfkd().filter(|c| !is_combining_mark(*c)) {
            match winansi_byte(d) {
                Some(byte) => decomposed.push(byte),
                None => {
                    encodable = false;
                    break;
                }
            }
        }
        if encodable && !decomposed.is_empty() {
            out.bytes.extend_from_slice(&decomposed);
        } else {
            out.bytes.push(b'?');
        }
    }

    out
}

/// Escape bytes for use inside a PDF literal string (without the parens).
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out
}

/// Encode and escape text as a complete literal string, parens included.
pub fn literal_string(text: &str) -> String {
    format!("({})", escape_bytes(&encode_text(text).bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let encoded = encode_text("Revenue $4.2M");
        assert_eq!(encoded.bytes, b"Revenue $4.2M");
        assert_eq!(encoded.replaced, 0);
    }

    #[test]
    fn test_latin1_and_cp1252() {
        assert_eq!(encode_text("é").bytes, vec![0xE9]);
        assert_eq!(encode_text("·").bytes, vec![0xB7]);
        assert_eq!(encode_text("• x").bytes, vec![0x95, b' ', b'x']);
        assert_eq!(encode_text("€").bytes, vec![0x80]);
    }

    #[test]
    fn test_transliteration() {
        let encoded = encode_text("ő ≥ ﬁ");
        assert_eq!(encoded.bytes, b"o >= fi");
        assert_eq!(encoded.replaced, 3);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        let encoded = encode_text("数据");
        assert_eq!(encoded.bytes, b"??");
        assert_eq!(encoded.replaced, 2);
    }

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(encode_text("a\tb\nc").bytes, b"a b c");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape_bytes(b"a\\b(c)"), "a\\\\b\\(c\\)");
    }

    #[test]
    fn test_escape_high_bytes_as_octal() {
        assert_eq!(escape_bytes(&[0x95, b' ', 0xE9]), "\\225 \\351");
    }

    #[test]
    fn test_literal_string_is_ascii() {
        let literal = literal_string("Market Insights (Last updated Today · 2:14 PM)");
        assert!(literal.is_ascii());
        assert_eq!(
            literal,
            "(Market Insights \\(Last updated Today \\267 2:14 PM\\))"
        );
    }
}
