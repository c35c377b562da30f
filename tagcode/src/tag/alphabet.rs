//! Positional base-N digit coding against a fixed ordered alphabet.
//!
//! The alphabet defines both the numeral base (its length) and the mapping
//! between digit values and characters (a digit's value is its character's
//! position). Both supported alphabets are ASCII and the lookup is
//! case-sensitive: `'p'` is not a digit of an alphabet containing `'P'`.

/// An ordered set of distinct ASCII characters used as base-N digits.
///
/// The alphabet is immutable and chosen once at codec construction; both
/// supported configurations are defined in [`super::Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static str,
}

impl Alphabet {
    /// Creates an alphabet over the given character string. The characters
    /// must be distinct ASCII; both fixed configurations satisfy this.
    pub(super) const fn new(chars: &'static str) -> Self {
        Self { chars }
    }

    /// Returns the numeral base, i.e. the number of characters.
    pub fn base(&self) -> u64 {
        self.chars.len() as u64
    }

    /// Encodes a value as base-N digits, most-significant first.
    ///
    /// The representation is minimal: no leading zero-digit character, and
    /// zero encodes to the empty string.
    pub fn encode(&self, mut value: u64) -> String {
        let digits = self.chars.as_bytes();
        let base = digits.len() as u64;

        let mut out = Vec::new();
        while value > 0 {
            out.push(digits[(value % base) as usize] as char);
            value /= base;
        }

        out.into_iter().rev().collect()
    }

    /// Looks up the digit value of a character, or `None` if the character
    /// is not part of the alphabet.
    pub fn digit(&self, ch: char) -> Option<u32> {
        self.chars.chars().position(|c| c == ch).map(|idx| idx as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const STANDARD: Alphabet = Alphabet::new("0289PYLQGRJCUV");

    /// Test minimal-length encoding against hand-computed digit strings
    #[test_case(0, ""; "zero is empty")]
    #[test_case(1, "2"; "single digit")]
    #[test_case(13, "V"; "highest digit")]
    #[test_case(14, "20"; "base rolls over")]
    #[test_case(256, "2PP"; "multi digit")]
    #[test_case(14 * 14, "200"; "base squared")]
    fn test_encode(value: u64, expected: &str) {
        assert_eq!(STANDARD.encode(value), expected);
    }

    /// Encoded output never starts with the zero-digit character and only
    /// contains alphabet characters.
    #[test]
    fn test_encode_is_minimal() {
        for value in 1..10_000u64 {
            let encoded = STANDARD.encode(value);
            assert_ne!(encoded.chars().next(), Some('0'), "value {value}");
            assert!(encoded.chars().all(|c| STANDARD.digit(c).is_some()));
        }
    }

    #[test_case('0', Some(0); "first character")]
    #[test_case('V', Some(13); "last character")]
    #[test_case('P', Some(4); "middle character")]
    #[test_case('p', None; "case sensitive")]
    #[test_case('A', None; "absent character")]
    #[test_case('#', None; "prefix is not a digit")]
    fn test_digit_lookup(ch: char, expected: Option<u32>) {
        assert_eq!(STANDARD.digit(ch), expected);
    }

    /// Digit lookup inverts encoding digit-by-digit.
    #[test]
    fn test_digits_invert_encode() {
        let base = STANDARD.base();
        for value in [1u64, 7, 255, 4096, 987_654_321] {
            let decoded = STANDARD
                .encode(value)
                .chars()
                .fold(0u64, |acc, ch| {
                    acc * base + u64::from(STANDARD.digit(ch).unwrap())
                });
            assert_eq!(decoded, value);
        }
    }
}
