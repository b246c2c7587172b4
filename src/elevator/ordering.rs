/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/**
 * Orders a set of pending stops into a visitation sequence.
 *
 * Greedy nearest-neighbour construction: starting at `start`, repeatedly pick the
 * pending floor closest to the last chosen stop and make it the new anchor. This is
 * a local heuristic over absolute floor distance, it is not guaranteed to give the
 * shortest possible tour over all the stops.
 *
 * Ties on distance go to the numerically lower floor. Duplicate floors in `pending`
 * are visited once.
 *
 * # Arguments
 * - `start`:       The floor the elevator is currently anchored at.
 * - `pending`:     The floors that still need a visit, in any order.
 *
 * # Returns
 * Every distinct pending floor exactly once, in visitation order.
 */
pub fn order<I>(start: Floor, pending: I) -> Vec<Floor>
where
    I: IntoIterator<Item = Floor>,
{
    // Ascending, so scanning with a strict comparison keeps the lowest floor on ties
    let mut unvisited: Vec<Floor> = pending
        .into_iter()
        .collect::<BTreeSet<Floor>>()
        .into_iter()
        .collect();
    let mut visited = Vec::with_capacity(unvisited.len());

    let mut anchor = start;
    while !unvisited.is_empty() {
        let mut pick_index = 0;
        let mut min = distance(anchor, unvisited[0]);
        for (i, &floor) in unvisited.iter().enumerate().skip(1) {
            let d = distance(anchor, floor);
            if d < min {
                min = d;
                pick_index = i;
            }
        }

        anchor = unvisited.remove(pick_index);
        visited.push(anchor);
    }

    visited
}

/// Number of floors between `a` and `b`. Unsigned, so any two floors fit.
pub fn distance(a: Floor, b: Floor) -> u32 {
    a.abs_diff(b)
}
