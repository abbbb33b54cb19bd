//! Configuration options for a session.

use crate::{parser::DEFAULT_MAX_DEPTH, region::DEFAULT_CAPACITY};

/// Configuration options for a [`Session`](super::Session).
///
/// # Example
///
/// ```
/// use tally_core::api::SessionOptions;
///
/// let options = SessionOptions {
///     region_capacity: 64 * 1024,
///     max_depth: 100,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Size in bytes of the region backing each evaluation.
    ///
    /// Default: 4 MiB
    pub region_capacity: usize,

    /// Maximum number of nested parenthesized groups accepted by the parser.
    /// Operator chains do not count; `0` forbids groups entirely.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            region_capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
