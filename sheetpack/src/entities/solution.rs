use crate::entities::{Batch, Sheet};

/// The result of packing a single [`Batch`]: its sealed sheets, in the order they were opened.
#[derive(Clone, Debug)]
pub struct BatchSolution {
    pub label: Option<String>,
    pub sheets: Vec<Sheet>,
}

impl BatchSolution {
    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn n_placed(&self) -> usize {
        self.sheets.iter().map(|s| s.placements().len()).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.sheets.iter().map(|s| s.weight()).sum()
    }

    pub fn placed_item_area(&self, batch: &Batch) -> f32 {
        self.sheets.iter().map(|s| s.placed_item_area(batch)).sum()
    }

    /// Sum of the area of the placed items divided by the total area of the sheets used.
    pub fn density(&self, batch: &Batch) -> f32 {
        let total_sheet_area = self.sheets.iter().map(|s| s.area()).sum::<f32>();
        match total_sheet_area > 0.0 {
            true => self.placed_item_area(batch) / total_sheet_area,
            false => 0.0,
        }
    }
}
