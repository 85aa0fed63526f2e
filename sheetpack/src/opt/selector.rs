use crate::entities::{Batch, Sheet};
use crate::geometry::Orientation;
use crate::geometry::primitives::Point;
use ordered_float::OrderedFloat;

/// An item which can be placed on the active sheet, together with where and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Position of the item in the pool of unplaced items
    pub pool_index: usize,
    /// Index of the item in its [`Batch`]
    pub item_index: usize,
    pub orientation: Orientation,
    /// Top-left corner of the (inflated) footprint
    pub position: Point,
    /// Distance between the item's density and the sheet's target density, lower is better
    pub score: f32,
}

/// The density the remaining items should have to exactly use up the remaining weight budget
/// and the remaining free area of the sheet simultaneously.
/// `None` if the sheet has no free area left.
pub fn target_density(sheet: &Sheet) -> Option<f32> {
    let remaining_area = sheet.free_space().remaining_area();
    match remaining_area > 0.0 {
        true => Some((sheet.remaining_capacity() / remaining_area as f64) as f32),
        false => None,
    }
}

/// Picks the next item to place on `sheet` from the `pool` of unplaced items
/// (indices into `batch`).
///
/// Every item is tried in both orientations.
/// Among the items that fit, both by weight and by footprint,
/// the one whose density is closest to the sheet's [`target_density`] is selected.
/// Ties go to the earliest item in the pool,
/// and to the original orientation before the rotated one.
///
/// Returns `None` when nothing fits anymore, meaning the sheet should be sealed.
pub fn select(sheet: &Sheet, batch: &Batch, pool: &[usize]) -> Option<Candidate> {
    let target = target_density(sheet)?;

    pool.iter()
        .enumerate()
        .flat_map(|(pool_index, &item_index)| {
            let item = batch.item(item_index);
            Orientation::ALL.into_iter().filter_map(move |orientation| {
                let position = sheet.admit(item, orientation)?;
                Some(Candidate {
                    pool_index,
                    item_index,
                    orientation,
                    position,
                    score: (item.density - target).abs(),
                })
            })
        })
        .min_by_key(|c| OrderedFloat(c.score))
}
