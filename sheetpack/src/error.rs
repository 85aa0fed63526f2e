use thiserror::Error;

/// Errors that can occur while packing a batch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// The item does not fit an empty sheet in either orientation.
    #[error(
        "item {item_id} ({width}x{height}) exceeds the {sheet_width}x{sheet_height} sheet in both orientations"
    )]
    ItemExceedsSheet {
        item_id: String,
        width: f32,
        height: f32,
        sheet_width: f32,
        sheet_height: f32,
    },

    /// The weight of the item alone exceeds the capacity of a sheet.
    #[error("item {item_id} weighs {weight}, which exceeds the sheet capacity of {capacity}")]
    ItemExceedsCapacity {
        item_id: String,
        weight: f64,
        capacity: f64,
    },

    /// The packing configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sheet refused a placement which did not pass its admission test.
    #[error("placement of item {item_id} rejected by sheet {sheet_index}")]
    PlacementRejected { item_id: String, sheet_index: usize },
}

impl PackError {
    /// True for errors caused by an item that no sheet, empty or not, could ever hold.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PackError::ItemExceedsSheet { .. } | PackError::ItemExceedsCapacity { .. }
        )
    }
}
