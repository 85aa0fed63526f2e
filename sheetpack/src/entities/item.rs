use jiff::civil::DateTime;

use crate::geometry::Orientation;

/// A single physical piece to be placed on a sheet.
/// Its dimensions are inflated: they already include the clearance margin on every side.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Identifier of the item, not necessarily unique
    pub id: String,
    /// Inflated width, the larger of the two cross-sectional dimensions
    pub width: f32,
    /// Inflated height
    pub height: f32,
    pub weight: f64,
    /// Moment the item was inserted
    pub timestamp: DateTime,
    /// Inflated area
    pub area: f32,
    /// Weight per unit of inflated area
    pub density: f32,
}

impl Item {
    /// Creates an item from already inflated dimensions.
    pub fn new(
        id: impl Into<String>,
        width: f32,
        height: f32,
        weight: f64,
        timestamp: DateTime,
    ) -> Self {
        let area = width * height;
        Item {
            id: id.into(),
            width,
            height,
            weight,
            timestamp,
            area,
            density: (weight / area as f64) as f32,
        }
    }

    /// Creates an item from its raw dimensions, inflating both by twice the `margin`.
    pub fn from_raw(
        id: impl Into<String>,
        raw_width: f32,
        raw_height: f32,
        weight: f64,
        timestamp: DateTime,
        margin: f32,
    ) -> Self {
        Item::new(
            id,
            raw_width + 2.0 * margin,
            raw_height + 2.0 * margin,
            weight,
            timestamp,
        )
    }

    /// Width and height of the item's footprint in the given orientation.
    pub fn dims(&self, orientation: Orientation) -> (f32, f32) {
        orientation.apply(self.width, self.height)
    }

    /// True if the item fits a `sheet_width` x `sheet_height` rectangle
    /// in at least one orientation.
    pub fn fits_within(&self, sheet_width: f32, sheet_height: f32) -> bool {
        Orientation::ALL.iter().any(|o| {
            let (w, h) = self.dims(*o);
            w <= sheet_width && h <= sheet_height
        })
    }
}
