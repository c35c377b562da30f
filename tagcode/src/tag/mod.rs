//! # Tag Codec
//!
//! `tag` converts between 64-bit identifiers and short human-readable tag
//! codes such as `#2RUY8` or `XEUUE`, using a fixed custom alphabet and a
//! fixed bit-layout transform.
//!
//! ## Usage Example
//!
//! ```
//! use tagcode::tag::{split_identifier, TagCodec, Variant};
//!
//! let codec = TagCodec::new(Variant::Standard);
//!
//! // Encode an identifier's (high, low) parts into a tag code
//! let code = codec.encode(0, 256).unwrap();
//! assert_eq!(code, "#2RUY8");
//!
//! // Decode it back and split the identifier into its parts
//! let id = codec.decode(&code).unwrap();
//! assert_eq!(split_identifier(id), (0, 256));
//! ```
//!
//! ## Compatibility Considerations
//!
//! The codec interoperates with an external system that already assigns
//! these tags, so every observable detail is fixed:
//!
//! * The two alphabet/prefix configurations (see [`Variant`])
//! * The bit interleave between the (high, low) pair and the encoded value
//! * The fixed-width two-lane decode recurrence and its overflow sentinel
//! * The total code length bound of [`MAX_CODE_LENGTH`] characters
//!
//! ## Architecture
//!
//! * **Alphabet**: positional base-N digit encoding and lookup
//! * **TagCodec**: the prefix + bit-layout transform over an alphabet
//! * **Neighbors**: tag codes for identifiers adjacent to a decoded one

mod alphabet;
mod codec;
mod neighbors;


pub use alphabet::Alphabet;

pub use codec::split_identifier;
pub use codec::DecodeError;
pub use codec::EncodeError;
pub use codec::TagCodec;
pub use codec::Variant;

pub use neighbors::Neighbors;

/// Maximum total length of a tag code, prefix included. Codes of this
/// length or longer are rejected when decoding; the bound is never reached
/// when encoding because a packed identifier fits in 40 bits.
pub const MAX_CODE_LENGTH: usize = 14;
