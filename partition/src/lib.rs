pub mod block_set;
pub mod error;
pub mod plan;
pub mod split;
pub(crate) mod gap_fill;
pub(crate) mod search;
pub(crate) mod walk;

pub use block_set::{BlockSizeSet, DEFAULT_BLOCK_SIZES};
pub use error::PartitionError;
pub use plan::PartitionPlan;
pub use split::{Strategy, split_arena, split_arena_with};
