use crate::block_set::BlockSizeSet;

/// The subset of block sizes taking part in one arena's distribution, in
/// descending order, with the per-step byte unit shared by all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Workable {
    pub sizes: Vec<usize>,
    pub unit: usize,
}

impl Workable {
    pub fn smallest(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }
}

// Finds the widest usable subset of the configured sizes: for each
// partition count (len down to 1) the unit is the largest size fitting
// one equal budget, and sizes at or below it join the run while one unit
// per size still fits the arena. Longest run wins; ties go to the largest
// partition count. Counts whose budget fits no size only occur before the
// first usable one and are skipped. None only when the arena is smaller
// than every size; callers treat that as an all-gap plan.
pub(crate) fn widest_workable(arena_size: usize, sizes: &BlockSizeSet) -> Option<Workable> {
    let mut best: Option<Workable> = None;
    for partition in (1..=sizes.len()).rev() {
        let budget = arena_size / partition;
        let Some(unit) = sizes.iter().find(|&size| size <= budget) else {
            continue;
        };
        let mut run = Vec::new();
        let mut cumulative = 0;
        for size in sizes.iter().filter(|&size| size <= unit) {
            cumulative += unit;
            if cumulative > arena_size {
                break;
            }
            run.push(size);
        }
        if best.as_ref().is_none_or(|b| run.len() > b.sizes.len()) {
            best = Some(Workable { sizes: run, unit });
        }
    }
    best
}
