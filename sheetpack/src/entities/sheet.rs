use crate::PackError;
use crate::entities::{Batch, FreeSpaceTracker, Item, Placement};
use crate::geometry::Orientation;
use crate::geometry::primitives::{Point, Rect};
use crate::util::PackConfig;
use crate::util::assertions;

/// A single sheet on which items are placed, subject to its bounds and a weight budget.
///
/// Keeps an ordered log of all placements and the running weight.
/// Placements are only ever appended; once sealed, a sheet accepts no further items.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// 1-based index of the sheet within its batch
    pub index: usize,
    /// Bounds of the sheet
    pub bbox: Rect,
    /// Maximum total weight of the placed items
    pub capacity: f64,
    free_space: FreeSpaceTracker,
    placements: Vec<Placement>,
    weight: f64,
    sealed: bool,
}

impl Sheet {
    pub fn new(index: usize, config: &PackConfig) -> Self {
        let bbox = Rect::new(0.0, 0.0, config.sheet_width, config.sheet_height);
        Sheet {
            index,
            bbox,
            capacity: config.weight_capacity,
            free_space: FreeSpaceTracker::new(bbox),
            placements: vec![],
            weight: 0.0,
            sealed: false,
        }
    }

    /// Admission test for placing `item` in `orientation`.
    /// Returns the position the item would be placed at, if both its weight and its footprint fit.
    pub fn admit(&self, item: &Item, orientation: Orientation) -> Option<Point> {
        if self.sealed || !self.weight_fits(item) {
            return None;
        }
        let (w, h) = item.dims(orientation);
        self.free_space.find_position_for(w, h)
    }

    /// True if adding `item` keeps the sheet within its weight capacity.
    pub fn weight_fits(&self, item: &Item) -> bool {
        self.weight + item.weight <= self.capacity
    }

    /// Places the item at `position`, which must be the position returned by [`Sheet::admit`].
    pub fn place(
        &mut self,
        item_index: usize,
        item: &Item,
        orientation: Orientation,
        position: Point,
    ) -> Result<&Placement, PackError> {
        if self.admit(item, orientation) != Some(position) {
            return Err(PackError::PlacementRejected {
                item_id: item.id.clone(),
                sheet_index: self.index,
            });
        }
        let (w, h) = item.dims(orientation);
        let rect = Rect::at(position, w, h);
        self.free_space.place(rect);
        self.weight += item.weight;
        self.placements.push(Placement {
            item_index,
            rect,
            orientation,
            cumulative_weight: self.weight,
        });

        debug_assert!(assertions::placements_are_disjoint(self));

        Ok(self.placements.last().expect("placement was just pushed"))
    }

    /// Closes the sheet. No further placements will be accepted.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total weight of the placed items
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.weight
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn free_space(&self) -> &FreeSpaceTracker {
        &self.free_space
    }

    pub fn area(&self) -> f32 {
        self.bbox.area()
    }

    /// The sum of the inflated areas of the placed items.
    pub fn placed_item_area(&self, batch: &Batch) -> f32 {
        self.placements
            .iter()
            .map(|p| batch.item(p.item_index).area)
            .sum()
    }

    /// Ratio of the placed item area to the area of the sheet.
    pub fn density(&self, batch: &Batch) -> f32 {
        self.placed_item_area(batch) / self.area()
    }
}
