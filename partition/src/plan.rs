use std::collections::BTreeMap;

/// The finalized partition of one arena: a block count per configured size
/// plus the unallocated gap. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    arena_size: usize,
    counts: BTreeMap<usize, usize>,
    gap: usize,
}

impl PartitionPlan {
    pub(crate) fn new(arena_size: usize, counts: BTreeMap<usize, usize>, gap: usize) -> Self {
        PartitionPlan {
            arena_size,
            counts,
            gap,
        }
    }

    pub fn arena_size(&self) -> usize {
        self.arena_size
    }

    pub fn gap(&self) -> usize {
        self.gap
    }

    /// Count for one block size; zero for sizes outside the configured set.
    pub fn count_of(&self, size: usize) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    pub fn allocated_bytes(&self) -> usize {
        self.counts.iter().map(|(size, count)| size * count).sum()
    }

    /// `(size, count)` pairs for every configured size, largest first.
    pub fn iter_desc(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&size, &count)| (size, count))
    }
}
