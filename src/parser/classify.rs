//! Byte classification for the hand-written scanner
//!
//! Every byte falls into exactly one [`CharClass`]. The classes are ordered so
//! that the derived predicates are plain comparisons: anything above
//! [`CharClass::Digit`] can start an identifier, anything above
//! [`CharClass::Delimiter`] can continue one.
//!
//! Only ASCII is classified. Every byte at or above `0x80` is
//! [`CharClass::Invalid`], and so are most control bytes (`\r` included).

/// Class of a single source byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CharClass {
    Invalid,
    Delimiter,
    Digit,
    HexDigit,
    Letter,
}

impl CharClass {
    /// Classify one byte
    pub const fn of(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' => CharClass::Digit,
            b'A'..=b'F' | b'a'..=b'f' => CharClass::HexDigit,
            b'G'..=b'Z' | b'g'..=b'z' => CharClass::Letter,
            // Tab, line feed, form feed
            0x09 | 0x0a | 0x0c => CharClass::Delimiter,
            // Printable punctuation, space and '_' included
            b' '..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~' => CharClass::Delimiter,
            _ => CharClass::Invalid,
        }
    }
}

/// Letters, hex letters included
pub fn is_letter(byte: u8) -> bool {
    CharClass::of(byte) > CharClass::Digit
}

/// Letters and digits
pub fn is_alnum(byte: u8) -> bool {
    CharClass::of(byte) > CharClass::Delimiter
}

pub fn is_digit(byte: u8) -> bool {
    CharClass::of(byte) == CharClass::Digit
}

/// Whitespace skipped between tokens. Independent of the class table:
/// `\r` is whitespace here even though it classifies as invalid.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}
