use std::collections::BTreeMap;

use crate::search::Workable;

// Center-outward order: pivot, then alternating left/right. The pivot sits
// one below the middle to favor the smaller sizes; at len 1 it lands at -1
// and is dropped, the lone index enters through the first outward step.
pub(crate) fn visit_order(len: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    let mid = (len / 2) as isize - 1;
    if mid >= 0 {
        order.push(mid as usize);
    }
    let mut dist = 1;
    loop {
        let mut level_empty = true;
        for idx in [mid - dist, mid + dist] {
            if idx >= 0 && (idx as usize) < len {
                order.push(idx as usize);
                level_empty = false;
            }
        }
        if level_empty {
            break;
        }
        dist += 1;
    }
    order
}

// Sweeps the visiting order, one distribution unit per visited size, until
// less than a unit remains. Every workable size is at most the unit, so a
// visit allocates at least one block and the sweep always advances.
pub(crate) fn distribute(
    counts: &mut BTreeMap<usize, usize>,
    workable: &Workable,
    remaining: &mut usize,
) {
    let order = visit_order(workable.sizes.len());
    if order.is_empty() {
        return;
    }
    let unit = workable.unit;
    while *remaining >= unit {
        for &idx in &order {
            if *remaining < unit {
                break;
            }
            let size = workable.sizes[idx];
            let blocks = unit / size;
            *counts.entry(size).or_insert(0) += blocks;
            *remaining -= blocks * size;
        }
    }
}
