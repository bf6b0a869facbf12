use crate::error::PartitionError;

/// Block sizes supported by the array arena allocator.
pub const DEFAULT_BLOCK_SIZES: [usize; 6] = [1024, 512, 256, 128, 64, 32];

/// An immutable set of supported block sizes, stored in descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSizeSet {
    sizes: Vec<usize>,
}

impl BlockSizeSet {
    /// Builds a validated size set. Input order does not matter; sizes must
    /// be distinct and positive.
    pub fn new(sizes: &[usize]) -> Result<Self, PartitionError> {
        if sizes.is_empty() {
            return Err(PartitionError::InvalidBlockSizes {
                reason: "no block sizes given",
            });
        }
        if sizes.contains(&0) {
            return Err(PartitionError::InvalidBlockSizes {
                reason: "block sizes must be positive",
            });
        }
        let mut sorted = sizes.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(PartitionError::InvalidBlockSizes {
                reason: "block sizes must be distinct",
            });
        }
        Ok(BlockSizeSet { sizes: sorted })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn largest(&self) -> usize {
        self.sizes[0]
    }

    pub fn smallest(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Sizes in descending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }
}

impl Default for BlockSizeSet {
    fn default() -> Self {
        BlockSizeSet {
            sizes: DEFAULT_BLOCK_SIZES.to_vec(),
        }
    }
}
