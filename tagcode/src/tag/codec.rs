//! The identifier/tag-code transform.
//!
//! An identifier is conceptually a (high, low) pair: a high part that must
//! fit in one byte and a 32-bit low part. Encoding interleaves the pair into
//! a packed 64-bit value and writes it as prefixed base-N digits; decoding
//! runs the digit recurrence over two 32-bit lanes and extracts the pair
//! from the accumulated value.
//!
//! ## Bit layout
//!
//! The packed value fed to the alphabet coder is
//!
//! ```text
//! packed = ((low >> 24) << 32) | ((high | (low << 8)) & 0xFFFF_FFFF)
//! ```
//!
//! i.e. the top byte of `low` becomes the high 32 bits, and the low 32 bits
//! are `high` in the bottom byte with the remaining bytes of `low` above it.
//! This interleave is externally mandated and reproduced exactly.
//!
//! ## Decode lanes
//!
//! The decode recurrence tracks a 32-bit low lane (the truncated
//! multiply-add) and a 32-bit high lane (the carry out of the previous
//! combined 64-bit pair), with wrapping arithmetic throughout. A final
//! all-ones pattern across both lanes is the overflow sentinel.

use super::{Alphabet, MAX_CODE_LENGTH};

/// The alphabet used by the standard configuration.
const STANDARD_ALPHABET: &str = "0289PYLQGRJCUV";

/// The prefix character of standard tag codes.
const STANDARD_PREFIX: char = '#';

/// The alphabet used by the team configuration.
const TEAM_ALPHABET: &str = "QWERTYUPASDFGHJKLZCVBNM23456789";

/// The prefix character of team tag codes.
const TEAM_PREFIX: char = 'X';

/// Errors that can occur when encoding a (high, low) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The high part of the identifier must fit in one byte.
    #[error("high part {0} does not fit in one byte")]
    HighTooLarge(u32),
}

/// Errors that can occur when decoding a tag code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The code does not start with the configured prefix character.
    #[error("code does not start with the expected prefix '{expected}'")]
    BadPrefix {
        /// The prefix the codec was configured with.
        expected: char,
    },

    /// The code, prefix included, is at least [`MAX_CODE_LENGTH`]
    /// characters long.
    #[error("code length {0} is over the limit of {} characters", MAX_CODE_LENGTH - 1)]
    CodeTooLong(usize),

    /// The code contains a character that is not part of the configured
    /// alphabet. Lookup is case-sensitive.
    #[error("invalid character '{0}' in code")]
    InvalidCharacter(char),

    /// The decode lanes ended in the all-ones overflow pattern.
    #[error("decoded value overflowed the identifier range")]
    Overflow,
}

/// The two fixed alphabet/prefix configurations.
///
/// A configuration is selected once at codec construction and never mixed
/// mid-operation; codes produced under one variant do not decode under the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Base-14 alphabet `0289PYLQGRJCUV` with prefix `#`.
    Standard,
    /// Base-31 alphabet `QWERTYUPASDFGHJKLZCVBNM23456789` with prefix `X`.
    Team,
}

/// Converts between identifiers and tag codes for one fixed [`Variant`].
///
/// The codec is immutable and freely shareable; every operation is a pure
/// function of its arguments and the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCodec {
    alphabet: Alphabet,
    prefix: char,
}

impl TagCodec {
    /// Creates a codec for the given configuration.
    pub const fn new(variant: Variant) -> Self {
        match variant {
            Variant::Standard => Self {
                alphabet: Alphabet::new(STANDARD_ALPHABET),
                prefix: STANDARD_PREFIX,
            },
            Variant::Team => Self {
                alphabet: Alphabet::new(TEAM_ALPHABET),
                prefix: TEAM_PREFIX,
            },
        }
    }

    /// Returns the configured prefix character.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Returns the configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes an identifier's (high, low) parts into a tag code.
    ///
    /// The pair is interleaved into a packed 64-bit value (see the module
    /// docs for the exact layout) and written as prefixed base-N digits. A
    /// packed value of zero yields the bare prefix.
    ///
    /// ## Errors
    /// * `HighTooLarge` - if `high` does not fit in one byte
    pub fn encode(&self, high: u32, low: u32) -> Result<String, EncodeError> {
        if high >= 256 {
            return Err(EncodeError::HighTooLarge(high));
        }

        // Top byte of `low` into the high 32 bits; `high` OR-ed under the
        // remaining bytes of `low`, truncated to 32 bits.
        let packed = (u64::from(low >> 24) << 32) | u64::from(high | (low << 8));

        let mut code = String::with_capacity(MAX_CODE_LENGTH);
        code.push(self.prefix);
        code.push_str(&self.alphabet.encode(packed));

        Ok(code)
    }

    /// Decodes a tag code back into a 64-bit identifier.
    ///
    /// The bare prefix decodes to identifier `0`. The returned identifier
    /// splits into its (high, low) parts via [`split_identifier`].
    ///
    /// ## Errors
    /// * `BadPrefix` - if the code does not start with the configured prefix
    /// * `CodeTooLong` - if the code is 14 or more characters in total
    /// * `InvalidCharacter` - on the first character outside the alphabet
    /// * `Overflow` - if the lanes end in the all-ones overflow pattern
    pub fn decode(&self, code: &str) -> Result<u64, DecodeError> {
        let Some(digits) = code.strip_prefix(self.prefix) else {
            return Err(DecodeError::BadPrefix { expected: self.prefix });
        };

        let length = code.chars().count();
        if length >= MAX_CODE_LENGTH {
            return Err(DecodeError::CodeTooLong(length));
        }

        let base = self.alphabet.base();

        // Run the digit recurrence over two 32-bit lanes. Each iteration
        // multiplies the previous combined 64-bit pair, not an
        // arbitrary-precision accumulator: the low lane is the truncated
        // multiply-add and the high lane is the carry out of it.
        let mut low: u32 = 0;
        let mut high: u32 = 0;

        for ch in digits.chars() {
            let digit = self
                .alphabet
                .digit(ch)
                .ok_or(DecodeError::InvalidCharacter(ch))?;

            let wide = combine(high, low)
                .wrapping_mul(base)
                .wrapping_add(u64::from(digit));

            low = wide as u32;
            high = (wide >> 32) as u32;
        }

        // Both lanes all-ones is the overflow sentinel.
        if low & high == u32::MAX {
            return Err(DecodeError::Overflow);
        }

        // Drop the low byte of the pair; the low 31 bits of what remains are
        // the low output field, and the low byte of the final low lane is
        // the high output field.
        let shifted = combine(high, low) >> 8;
        let low_out = (shifted as u32) & 0x7FFF_FFFF;
        let high_out = low & 0xFF;

        Ok(combine(high_out, low_out))
    }
}

/// Splits an identifier into its (high, low) parts.
///
/// Pure bit extraction with no validation: the high part is the top 32 bits
/// and the low part the bottom 32. A high part over 255 is representable
/// here but will be rejected by [`TagCodec::encode`].
pub fn split_identifier(value: u64) -> (u32, u32) {
    ((value >> 32) as u32, value as u32)
}

/// Combines 32-bit high and low halves into a 64-bit value.
fn combine(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}
