// src/digit.rs

//! Seven-segment digit decoding.
//!
//! Each numeral on the meter's LCD is split across two adjacent frame
//! bytes: the lower four segment bits live in the digit's own byte, the
//! upper three in the byte before it. Bit 4 of the digit's byte is the
//! decimal point and is handled by the frame decoder, not here.

/// Combines a digit byte pair into the 8-bit segment key used for glyph
/// lookup. Bit 4 (decimal point) never participates in the key.
#[inline]
pub const fn segment_key(current: u8, previous: u8) -> u8 {
    (current & 0x0F) | (previous & 0xE0)
}

/// Decodes one display cell from its byte pair.
///
/// Total over all inputs, with three outcomes:
/// * `Some(' ')` — segment key 0, a genuinely blank cell;
/// * `Some(c)` — one of the 13 known glyphs `'0'`-`'9'`, `'L'`, `'E'`, `'F'`;
/// * `None` — an unrecognized segment pattern. Not an error: the physical
///   display can show partial glyphs (mid-update, low battery), and the
///   caller simply contributes nothing to the readout for such a cell.
pub const fn decode_digit(current: u8, previous: u8) -> Option<char> {
    match segment_key(current, previous) {
        0x00 => Some(' '),
        0xEB => Some('0'),
        0x0A => Some('1'),
        0xAD => Some('2'),
        0x8F => Some('3'),
        0x4E => Some('4'),
        0xC7 => Some('5'),
        0xE7 => Some('6'),
        0x8A => Some('7'),
        0xEF => Some('8'),
        0xCF => Some('9'),
        0x61 => Some('L'),
        0xE5 => Some('E'),
        0xE4 => Some('F'),
        _ => None,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_key_masks() {
        assert_eq!(segment_key(0x0F, 0xE0), 0xEF);
        assert_eq!(segment_key(0xFF, 0xFF), 0xEF);
        // Decimal-point bit of the current byte is excluded from the key.
        assert_eq!(segment_key(0x1A, 0x00), 0x0A);
        // Bits 0-4 of the previous byte (the flag bits) are excluded too.
        assert_eq!(segment_key(0x00, 0x1F), 0x00);
    }

    #[test]
    fn test_blank_for_zero_key() {
        // Any pair whose masked combination is zero decodes to a blank cell.
        for (current, previous) in [(0x00, 0x00), (0x10, 0x00), (0xF0, 0x1F), (0x30, 0x17)] {
            assert_eq!(segment_key(current, previous), 0);
            assert_eq!(decode_digit(current, previous), Some(' '));
        }
    }

    #[test]
    fn test_all_known_glyphs() {
        let glyphs = [
            (0xEB, '0'),
            (0x0A, '1'),
            (0xAD, '2'),
            (0x8F, '3'),
            (0x4E, '4'),
            (0xC7, '5'),
            (0xE7, '6'),
            (0x8A, '7'),
            (0xEF, '8'),
            (0xCF, '9'),
            (0x61, 'L'),
            (0xE5, 'E'),
            (0xE4, 'F'),
        ];
        for (key, expected) in glyphs {
            // Feed the key back in split across the byte pair.
            assert_eq!(decode_digit(key & 0x0F, key & 0xE0), Some(expected));
        }
    }

    #[test]
    fn test_unrecognized_patterns() {
        // A handful of keys outside the glyph table.
        assert_eq!(decode_digit(0x01, 0x00), None); // key 0x01
        assert_eq!(decode_digit(0x0B, 0x00), None); // key 0x0B
        assert_eq!(decode_digit(0x00, 0xE0), None); // key 0xE0
        assert_eq!(decode_digit(0x03, 0xA0), None); // key 0xA3
    }

    #[test]
    fn test_pure_and_repeatable() {
        for _ in 0..3 {
            assert_eq!(decode_digit(0x0B, 0xE0), decode_digit(0x0B, 0xE0));
        }
        assert_eq!(decode_digit(0x0B, 0xE0), Some('0'));
    }
}
