//! Seven-segment glyphs.
//!
//! Patterns use the common `ABCDEFG` ordering with segment A in bit 6 and
//! segment G in bit 0; bit 7 is left free for the decimal point. They only
//! mean something when the matrix is wired to seven-segment digits, so they
//! live here rather than in the driver.

/// Glyphs for the hex digits `0`-`F`, indexed by value.
pub const NIBBLE: [u8; 16] = [
    0x7E, // 0
    0x30, // 1
    0x6D, // 2
    0x79, // 3
    0x33, // 4
    0x5B, // 5
    0x5F, // 6
    0x70, // 7
    0x7F, // 8
    0x7B, // 9
    0x77, // A
    0x1F, // b
    0x4E, // C
    0x3D, // d
    0x4F, // E
    0x47, // F
];

/// Decimal point segment.
pub const DOT: u8 = 0x80;

/// Glyph for the low nibble of `value`.
#[must_use]
pub const fn nibble(value: u8) -> u8 {
    NIBBLE[(value & 0x0F) as usize]
}

/// Glyph for a decimal digit, `None` above 9.
#[must_use]
pub const fn digit(value: u8) -> Option<u8> {
    if value > 9 {
        None
    } else {
        Some(NIBBLE[value as usize])
    }
}

/// Glyph for `0`-`9` and `A`-`F` (either case).
#[must_use]
pub const fn character(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(NIBBLE[c as usize - '0' as usize]),
        'A'..='F' => Some(NIBBLE[c as usize - 'A' as usize + 10]),
        'a'..='f' => Some(NIBBLE[c as usize - 'a' as usize + 10]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_masks_high_bits() {
        assert_eq!(nibble(0x0), 0x7E);
        assert_eq!(nibble(0xF), 0x47);
        assert_eq!(nibble(0xA3), nibble(0x3));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit(0), Some(0x7E));
        assert_eq!(digit(8), Some(0x7F));
        assert_eq!(digit(9), Some(0x7B));
        assert_eq!(digit(10), None);
    }

    #[test]
    fn test_characters() {
        assert_eq!(character('1'), Some(0x30));
        assert_eq!(character('A'), Some(0x77));
        assert_eq!(character('d'), Some(0x3D));
        assert_eq!(character('D'), character('d'));
        assert_eq!(character('G'), None);
        assert_eq!(character(' '), None);
    }

    #[test]
    fn test_glyphs_leave_dot_free() {
        for glyph in NIBBLE {
            assert_eq!(glyph & DOT, 0);
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for (i, a) in NIBBLE.iter().enumerate() {
            for b in &NIBBLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
