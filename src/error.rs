//! Error taxonomy for the index engine.
//!
//! Every public operation resolves to `Ok` or to one of the variants below.
//! The taxonomy is part of the API contract: callers distinguish a duplicate
//! key from an exhausted freelist by matching on the variant, not by parsing
//! a message. Propagation is strict short-circuit; the first failure aborts
//! the enclosing operation and earlier block writes stay committed.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// Key not present (lookup/update).
    #[error("key not present")]
    Nonexistent,

    /// Duplicate key on insert.
    #[error("duplicate key")]
    Conflict,

    /// Freelist exhausted.
    #[error("no free blocks")]
    NoSpace,

    /// Operation deliberately not provided.
    #[error("operation not implemented")]
    Unimplemented,

    /// Invariant violation. A programming error, never business logic.
    #[error("invariant violation: {0}")]
    Insane(&'static str),

    /// Byte-width mismatch in the block codec.
    #[error("size mismatch: expected {expected}, got {actual}")]
    Size { expected: usize, actual: usize },

    /// Slot index out of range.
    #[error("slot {index} out of range (limit {limit})")]
    Buffer { index: usize, limit: usize },

    /// I/O failure in a store backend.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;

impl IndexError {
    /// True for the variants that signal a bug rather than a caller-visible
    /// outcome. Tests use this to assert an operation failed "cleanly".
    pub fn is_insane(&self) -> bool {
        matches!(self, IndexError::Insane(_))
    }
}
