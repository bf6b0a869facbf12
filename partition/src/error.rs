use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("arena size must be greater than zero")]
    InvalidArenaSize,

    #[error("invalid block size set: {reason}")]
    InvalidBlockSizes { reason: &'static str },

    /// The final accounting check failed. The output feeds an allocator's
    /// static configuration, so a mismatch is never patched over.
    #[error(
        "inconsistent partition of a {arena_size} byte arena: \
         {allocated} bytes allocated with a {gap} byte gap"
    )]
    Inconsistent {
        arena_size: usize,
        allocated: usize,
        gap: usize,
    },
}
