use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B = ∅
    Disjoint,
}

/// The two orientations in which an item can be placed on a sheet.
/// A rotation is a single 90° turn, which swaps width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Original,
    Rotated,
}

impl Orientation {
    /// Both orientations, in the order in which they are evaluated.
    pub const ALL: [Orientation; 2] = [Orientation::Original, Orientation::Rotated];

    /// Applies the orientation to a `(width, height)` pair.
    pub fn apply(&self, width: f32, height: f32) -> (f32, f32) {
        match self {
            Orientation::Original => (width, height),
            Orientation::Rotated => (height, width),
        }
    }

    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotated)
    }
}
