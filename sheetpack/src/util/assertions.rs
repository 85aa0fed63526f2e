use crate::entities::{Batch, BatchSolution, Sheet};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and in tests

/// No two placements on the sheet overlap.
pub fn placements_are_disjoint(sheet: &Sheet) -> bool {
    sheet
        .placements()
        .iter()
        .tuple_combinations()
        .all(|(p1, p2)| {
            let overlap = p1.rect.intersects(&p2.rect);
            if overlap {
                error!(
                    "sheet {}: items {} and {} overlap ({:?}, {:?})",
                    sheet.index, p1.item_index, p2.item_index, p1.rect, p2.rect
                );
            }
            !overlap
        })
}

/// Every placement lies within the bounds of the sheet.
pub fn placements_within_bounds(sheet: &Sheet) -> bool {
    sheet.placements().iter().all(|p| sheet.bbox.contains(&p.rect))
}

/// The running weight matches the placed items, the cumulative weights are increasing
/// and the capacity is respected.
pub fn weight_is_consistent(sheet: &Sheet, batch: &Batch) -> bool {
    let summed = sheet
        .placements()
        .iter()
        .map(|p| batch.item(p.item_index).weight)
        .sum::<f64>();

    let cumulative_ok = sheet
        .placements()
        .iter()
        .tuple_windows()
        .all(|(p1, p2)| p1.cumulative_weight <= p2.cumulative_weight);

    let last_ok = sheet
        .placements()
        .last()
        .is_none_or(|p| p.cumulative_weight == sheet.weight());

    approx_eq!(f64, summed, sheet.weight(), ulps = 4)
        && cumulative_ok
        && last_ok
        && sheet.weight() <= sheet.capacity
}

/// The placed (inflated) item area never exceeds the area of the sheet.
pub fn area_is_consistent(sheet: &Sheet, batch: &Batch) -> bool {
    sheet.placed_item_area(batch) <= sheet.area()
}

pub fn sheet_is_valid(sheet: &Sheet, batch: &Batch) -> bool {
    placements_are_disjoint(sheet)
        && placements_within_bounds(sheet)
        && weight_is_consistent(sheet, batch)
        && area_is_consistent(sheet, batch)
}

/// Every item of the batch is placed exactly once and the sheets are numbered 1, 2, 3, ...
pub fn solution_matches_batch(solution: &BatchSolution, batch: &Batch) -> bool {
    let placed = solution
        .sheets
        .iter()
        .flat_map(|s| s.placements().iter().map(|p| p.item_index))
        .sorted()
        .collect_vec();

    let numbering_ok = solution
        .sheets
        .iter()
        .enumerate()
        .all(|(i, s)| s.index == i + 1);

    placed == (0..batch.len()).collect_vec()
        && numbering_ok
        && solution.sheets.iter().all(|s| sheet_is_valid(s, batch))
}
