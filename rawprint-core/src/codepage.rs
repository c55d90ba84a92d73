//! Windows-1254 text encoding
//!
//! The printer is switched to its Turkish character table on init, and all
//! text is re-encoded from UTF-8 into the matching single-byte code page
//! before it goes on the wire.

/// Re-encode a string into Windows-1254 bytes.
///
/// Characters outside the code page's repertoire are replaced with `b'?'`.
/// encoding_rs would otherwise substitute an HTML numeric escape, which is
/// meaningless on paper, so the error path re-encodes character by
/// character. Encoding never fails.
pub fn encode(s: &str) -> Vec<u8> {
    let (cow, _, had_errors) = encoding_rs::WINDOWS_1254.encode(s);
    if !had_errors {
        return cow.into_owned();
    }

    let mut out = Vec::with_capacity(s.len());
    let mut utf8 = [0u8; 4];
    for c in s.chars() {
        let (bytes, _, bad) = encoding_rs::WINDOWS_1254.encode(c.encode_utf8(&mut utf8));
        if bad {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Printed column width of a string.
///
/// Windows-1254 is a single-byte encoding, so every character occupies one
/// column (the `?` substitute included).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello, world!"), b"Hello, world!");
    }

    #[test]
    fn test_turkish_letters() {
        // The twelve letters Turkish adds over ASCII, upper and lower
        let encoded = encode("ÇçĞğİıÖöŞşÜü");
        assert_eq!(
            encoded,
            vec![0xC7, 0xE7, 0xD0, 0xF0, 0xDD, 0xFD, 0xD6, 0xF6, 0xDE, 0xFE, 0xDC, 0xFC]
        );
    }

    #[test]
    fn test_euro_sign() {
        // 1254 inherits the Windows-125x layout: Euro at 0x80
        assert_eq!(encode("€"), vec![0x80]);
    }

    #[test]
    fn test_unmappable_replaced() {
        assert_eq!(encode("漢字"), b"??");
        assert_eq!(encode("a漢b"), b"a?b");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("Tarih:"), 6);
        assert_eq!(visible_width("ÇçĞğ"), 4);
        assert_eq!(visible_width("漢字"), 2);
    }

    #[test]
    fn test_width_matches_encoded_len() {
        for s in ["", "abc", "Fiş No", "İstanbul / Türkiye", "a漢b€"] {
            assert_eq!(visible_width(s), encode(s).len(), "width mismatch for {s:?}");
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ascii_encodes_to_itself(s in "[ -~]{0,64}") {
                prop_assert_eq!(encode(&s), s.as_bytes());
            }

            #[test]
            fn one_byte_per_char(s in "\\PC{0,64}") {
                prop_assert_eq!(encode(&s).len(), s.chars().count());
            }
        }
    }
}
