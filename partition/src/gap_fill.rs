use std::collections::BTreeMap;

use crate::search::Workable;

// Spreads the post-walk leftover across the sizes that still fit, smallest
// first. A size banks one skip credit per sweep until m * (skips + 1)
// reaches it, then takes a single block and resets; one whose block no
// longer fits keeps its credits and waits. m itself always fits while the
// loop runs, so every sweep allocates and the pass ends with remaining < m.
pub(crate) fn fill_gap(
    counts: &mut BTreeMap<usize, usize>,
    workable: &Workable,
    remaining: &mut usize,
) {
    let m = workable.smallest();
    let mut candidates: Vec<usize> = workable
        .sizes
        .iter()
        .copied()
        .filter(|&size| size <= *remaining)
        .collect();
    candidates.sort_unstable();
    let mut skips = vec![0usize; candidates.len()];

    while *remaining >= m {
        for (i, &size) in candidates.iter().enumerate() {
            if *remaining < m {
                break;
            }
            if size > m * (skips[i] + 1) {
                skips[i] += 1;
                continue;
            }
            if size > *remaining {
                continue;
            }
            *counts.entry(size).or_insert(0) += 1;
            *remaining -= size;
            skips[i] = 0;
        }
    }
}
