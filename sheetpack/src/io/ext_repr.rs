use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Set of independent batches to be packed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub batches: Vec<ExtBatch>,
}

/// Ordered group of items packed independently of all other batches
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub items: Vec<ExtItem>,
}

/// External representation of an [`Item`](crate::entities::Item).
/// Dimensions are sorted descending and already include the margin on every side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub weight: f64,
    pub timestamp: DateTime,
    /// Must equal `width * height`
    pub area: f32,
    /// Must equal `weight / area`
    pub density: f32,
}

/// Solution for all batches of an [`ExtInstance`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub batches: Vec<ExtBatchSolution>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBatchSolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// One row per placed item, in placement order
    pub rows: Vec<ExtPlacementRow>,
    pub stats: ExtBatchStats,
}

/// A placed item, positioned by the corner of the item itself (margin excluded)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementRow {
    /// 1-based index of the sheet within the batch
    pub sheet: usize,
    pub id: String,
    pub timestamp: DateTime,
    pub x: f32,
    pub y: f32,
    /// Total weight on the sheet right after this item was placed
    pub cumulative_weight: f64,
    pub rotated: bool,
}

/// Aggregated statistics of a packed batch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ExtBatchStats {
    pub n_sheets: usize,
    /// Average weight placed per sheet
    pub avg_weight: f64,
    /// Average weight per sheet as a percentage of the capacity
    pub avg_weight_pct: f64,
    /// Average (inflated) item area placed per sheet
    pub avg_area: f32,
    /// Average area per sheet as a percentage of the sheet area
    pub avg_area_pct: f32,
}
