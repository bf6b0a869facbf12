use std::collections::BTreeMap;

use crate::block_set::BlockSizeSet;
use crate::error::PartitionError;
use crate::gap_fill::fill_gap;
use crate::plan::PartitionPlan;
use crate::search::widest_workable;
use crate::walk::distribute;

/// How the arena is carved into block counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Widest-distribution search followed by the center-outward walk and
    /// the gap-filling pass.
    #[default]
    AlternatingWalk,
    /// Greedy divmod chain, largest size first. Mirrors the allocator's
    /// built-in default init lengths.
    LargestFirst,
}

/// Partitions an arena into per-size block counts plus a leftover gap,
/// using the alternating-walk strategy.
///
/// Rather than handing everything to the largest size, the arena is spread
/// across as many of the configured sizes as fit, biased toward the
/// low-to-mid sizes. An arena smaller than every configured size comes back
/// untouched: all counts zero, the whole arena as gap.
pub fn split_arena(
    arena_size: usize,
    sizes: &BlockSizeSet,
) -> Result<PartitionPlan, PartitionError> {
    split_arena_with(arena_size, sizes, Strategy::AlternatingWalk)
}

/// [`split_arena`] with an explicit strategy.
pub fn split_arena_with(
    arena_size: usize,
    sizes: &BlockSizeSet,
    strategy: Strategy,
) -> Result<PartitionPlan, PartitionError> {
    if arena_size == 0 {
        return Err(PartitionError::InvalidArenaSize);
    }

    let mut counts: BTreeMap<usize, usize> = sizes.iter().map(|size| (size, 0)).collect();
    let mut remaining = arena_size;

    if arena_size >= sizes.smallest() {
        match strategy {
            Strategy::AlternatingWalk => {
                if let Some(workable) = widest_workable(arena_size, sizes) {
                    distribute(&mut counts, &workable, &mut remaining);
                    fill_gap(&mut counts, &workable, &mut remaining);
                }
            }
            Strategy::LargestFirst => {
                for size in sizes.iter() {
                    *counts.entry(size).or_insert(0) += remaining / size;
                    remaining %= size;
                }
            }
        }
    }

    // Every byte must be accounted for: the plan seeds an allocator's
    // static free lists, so a mismatch aborts instead of being patched.
    let allocated: usize = counts.iter().map(|(size, count)| size * count).sum();
    if allocated.checked_add(remaining) != Some(arena_size) {
        return Err(PartitionError::Inconsistent {
            arena_size,
            allocated,
            gap: remaining,
        });
    }

    Ok(PartitionPlan::new(arena_size, counts, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> BlockSizeSet {
        BlockSizeSet::default()
    }

    fn counts_of(plan: &PartitionPlan) -> Vec<(usize, usize)> {
        plan.iter_desc().filter(|&(_, count)| count > 0).collect()
    }

    #[test]
    fn zero_arena_is_rejected() {
        assert_eq!(
            split_arena(0, &defaults()),
            Err(PartitionError::InvalidArenaSize)
        );
    }

    #[test]
    fn arena_below_smallest_size_is_all_gap() {
        let plan = split_arena(31, &defaults()).unwrap();
        assert_eq!(plan.allocated_bytes(), 0);
        assert_eq!(plan.gap(), 31);
    }

    #[test]
    fn arena_of_one_smallest_block() {
        let plan = split_arena(32, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(32, 1)]);
        assert_eq!(plan.gap(), 0);
    }

    #[test]
    fn one_byte_over_a_block_leaves_a_one_byte_gap() {
        let plan = split_arena(33, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(32, 1)]);
        assert_eq!(plan.gap(), 1);
    }

    #[test]
    fn hundred_bytes_go_to_the_small_sizes() {
        let plan = split_arena(100, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(32, 3)]);
        assert_eq!(plan.gap(), 4);
    }

    #[test]
    fn gap_just_below_the_smallest_size() {
        let plan = split_arena(63, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(32, 1)]);
        assert_eq!(plan.gap(), 31);
    }

    #[test]
    fn two_sizes_share_once_both_fit() {
        let plan = split_arena(192, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(64, 2), (32, 2)]);
        assert_eq!(plan.gap(), 0);
    }

    #[test]
    fn mid_arena_favors_the_low_to_mid_sizes() {
        let plan = split_arena(512, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(128, 2), (64, 2), (32, 4)]);
        assert_eq!(plan.gap(), 0);
    }

    #[test]
    fn uneven_arena_keeps_the_gap_small() {
        let plan = split_arena(1000, &defaults()).unwrap();
        assert_eq!(counts_of(&plan), vec![(128, 3), (64, 4), (32, 11)]);
        assert_eq!(plan.gap(), 8);
    }

    #[test]
    fn large_arena_populates_every_size() {
        let plan = split_arena(10_000, &defaults()).unwrap();
        assert_eq!(
            counts_of(&plan),
            vec![(1024, 1), (512, 4), (256, 8), (128, 18), (64, 20), (32, 40)]
        );
        assert_eq!(plan.gap(), 16);
    }

    #[test]
    fn power_of_two_arena_has_no_gap() {
        let plan = split_arena(65_536, &defaults()).unwrap();
        assert_eq!(
            counts_of(&plan),
            vec![(1024, 11), (512, 22), (256, 44), (128, 88), (64, 160), (32, 320)]
        );
        assert_eq!(plan.gap(), 0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first = split_arena(10_000, &defaults()).unwrap();
        let second = split_arena(10_000, &defaults()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_arena_in_range_conserves_bytes() {
        let sizes = defaults();
        for arena in 1..=5_000 {
            let plan = split_arena(arena, &sizes).unwrap();
            assert_eq!(
                plan.allocated_bytes() + plan.gap(),
                arena,
                "arena {arena} lost bytes"
            );
            if arena >= 32 {
                assert!(plan.gap() < 32, "arena {arena} gap {}", plan.gap());
            }
        }
    }

    #[test]
    fn largest_first_is_a_plain_divmod_chain() {
        let plan = split_arena_with(10_000, &defaults(), Strategy::LargestFirst).unwrap();
        assert_eq!(counts_of(&plan), vec![(1024, 9), (512, 1), (256, 1)]);
        assert_eq!(plan.gap(), 16);
    }

    #[test]
    fn largest_first_conserves_bytes_too() {
        let sizes = defaults();
        for arena in 1..=2_000 {
            let plan = split_arena_with(arena, &sizes, Strategy::LargestFirst).unwrap();
            assert_eq!(plan.allocated_bytes() + plan.gap(), arena);
        }
    }

    #[test]
    fn default_strategy_is_the_alternating_walk() {
        let sizes = defaults();
        let explicit = split_arena_with(512, &sizes, Strategy::AlternatingWalk).unwrap();
        assert_eq!(split_arena(512, &sizes).unwrap(), explicit);
        assert_eq!(Strategy::default(), Strategy::AlternatingWalk);
    }
}
