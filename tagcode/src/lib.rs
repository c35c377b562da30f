#![deny(missing_docs)]

//! # Tagcode
//!
//! This library converts between 64-bit numeric identifiers and the short
//! prefixed "tag" strings an external system uses to name them, and back.
//! The character set, prefix, bit layout and length bound of a tag code are
//! compatibility-critical: this crate reproduces them bit-exactly.

pub mod tag;
