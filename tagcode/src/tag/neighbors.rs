//! Tag codes for identifiers adjacent to a decoded one.

use super::codec::split_identifier;
use super::TagCodec;

/// Tag codes for the identifiers immediately below and above a base
/// identifier, each in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    /// Codes for identifiers in `[base - count, base)`, clamped at zero.
    pub previous: Vec<String>,
    /// Codes for identifiers in `(base, base + count]`.
    pub following: Vec<String>,
}

impl TagCodec {
    /// Enumerates tag codes for the identifiers within `count` of the one
    /// the given code decodes to.
    ///
    /// Candidates below identifier zero are skipped, as is any candidate
    /// whose high part no longer fits in one byte; a skipped candidate
    /// never aborts the rest of the enumeration. Both windows are fully
    /// materialized, in ascending identifier order.
    ///
    /// ## Errors
    /// Any error decoding the base code is propagated unchanged and
    /// produces no candidates.
    pub fn neighbors(&self, code: &str, count: u32) -> Result<Neighbors, super::DecodeError> {
        let base = self.decode(code)?;
        let count = u64::from(count);

        let previous = (base.saturating_sub(count)..base)
            .filter_map(|id| self.encode_identifier(id))
            .collect();

        let following = (base + 1..=base + count)
            .filter_map(|id| self.encode_identifier(id))
            .collect();

        Ok(Neighbors { previous, following })
    }

    /// Splits and re-encodes one candidate identifier, or `None` if its
    /// high part does not fit in one byte.
    fn encode_identifier(&self, id: u64) -> Option<String> {
        let (high, low) = split_identifier(id);
        match self.encode(high, low) {
            Ok(code) => Some(code),
            Err(err) => {
                tracing::debug!(id, %err, "skipping neighbor candidate");
                None
            }
        }
    }
}
