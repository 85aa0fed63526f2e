use crate::geometry::Orientation;
use crate::geometry::primitives::Rect;

/// Records where an item was placed on a sheet. Placements are never modified after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index of the placed item in its [`Batch`](crate::entities::Batch)
    pub item_index: usize,
    /// The occupied (inflated) rectangle
    pub rect: Rect,
    pub orientation: Orientation,
    /// Total weight on the sheet immediately after this placement
    pub cumulative_weight: f64,
}
