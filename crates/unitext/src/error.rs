use thiserror::Error;

use crate::decode::Encoding;

/// Recoverable errors reported by the checked entry points of this crate.
///
/// Iteration and the search algorithms never produce these: malformed input
/// is decoded as [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER) and
/// "not found" is the end of the searched range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtfError {
    /// An iterator was requested at an offset that falls inside a multi-unit
    /// sequence, or past the end of the buffer.
    #[error("offset {offset} is not a codepoint boundary (buffer length {len})")]
    NotBoundary {
        /// The rejected offset, in code units.
        offset: usize,
        /// Length of the buffer, in code units.
        len: usize,
    },
    /// Strict validation or transcoding met a malformed sequence.
    #[error("invalid {encoding} sequence at offset {offset}")]
    InvalidSequence {
        /// Encoding of the buffer being read.
        encoding: Encoding,
        /// Offset of the first malformed unit.
        offset: usize,
    },
}
