use thiserror::Error;

/// Failures reported by [`Region`](super::Region) operations.
///
/// None of these leave the region in a broken state: a failed allocation does
/// not move the offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("region capacity must be greater than zero")]
    ZeroCapacity,

    #[error("a region of {capacity} bytes cannot be allocated")]
    InvalidCapacity { capacity: usize },

    #[error("alignment {align} is not a power of two")]
    InvalidAlignment { align: usize },

    /// Not enough room left for the request plus its alignment padding.
    #[error("out of region: requested {requested} bytes with {remaining} bytes remaining")]
    OutOfRegion { requested: usize, remaining: usize },
}
