use std::time::Instant;

use crate::PackError;
use crate::entities::{Batch, BatchSolution, Item, Sheet};
use crate::opt::selector;
use crate::util::PackConfig;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Greedy packing engine: fills one sheet at a time, each time placing the item selected by
/// the density heuristic, and opens a new sheet once nothing fits anymore.
#[derive(Clone, Copy, Debug)]
pub struct PackingEngine {
    config: PackConfig,
}

impl PackingEngine {
    pub fn new(config: PackConfig) -> Result<Self, PackError> {
        config.validate()?;
        Ok(PackingEngine { config })
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Checks whether the item can be placed on an empty sheet.
    /// An item which cannot is a configuration error: no sheet will ever hold it.
    pub fn check_item(&self, item: &Item) -> Result<(), PackError> {
        let PackConfig {
            sheet_width,
            sheet_height,
            weight_capacity,
            ..
        } = self.config;

        if !item.fits_within(sheet_width, sheet_height) {
            return Err(PackError::ItemExceedsSheet {
                item_id: item.id.clone(),
                width: item.width,
                height: item.height,
                sheet_width,
                sheet_height,
            });
        }
        //written this way to also reject NaN weights
        if !(item.weight <= weight_capacity) {
            return Err(PackError::ItemExceedsCapacity {
                item_id: item.id.clone(),
                weight: item.weight,
                capacity: weight_capacity,
            });
        }
        Ok(())
    }

    /// Packs all items of the batch onto as few sheets as the heuristic manages.
    /// Sheets are numbered from 1 onwards.
    pub fn pack_batch(&self, batch: &Batch) -> Result<BatchSolution, PackError> {
        let start = Instant::now();

        batch.items.iter().try_for_each(|item| self.check_item(item))?;

        //indices of the items still to be placed, in arrival order
        let mut pool = (0..batch.len()).collect_vec();
        let mut sheets = vec![];

        while !pool.is_empty() {
            let sheet = self.fill_sheet(sheets.len() + 1, batch, &mut pool)?;
            sheets.push(sheet);
        }

        let solution = BatchSolution {
            label: batch.label.clone(),
            sheets,
        };

        debug_assert!(assertions::solution_matches_batch(&solution, batch));

        info!(
            "[PACK] batch {} packed: {} items on {} sheets ({:.3}% density) in {:.3}ms",
            batch.label.as_deref().unwrap_or("-"),
            solution.n_placed(),
            solution.n_sheets(),
            solution.density(batch) * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(solution)
    }

    /// Packs every batch independently, in parallel if requested.
    /// The solutions are returned in the order of the batches.
    pub fn pack_batches(
        &self,
        batches: &[Batch],
        parallel: bool,
    ) -> Result<Vec<BatchSolution>, PackError> {
        match parallel {
            true => batches.par_iter().map(|b| self.pack_batch(b)).collect(),
            false => batches.iter().map(|b| self.pack_batch(b)).collect(),
        }
    }

    /// Opens a new sheet and keeps placing items from the pool
    /// until the selector finds no candidate.
    fn fill_sheet(
        &self,
        index: usize,
        batch: &Batch,
        pool: &mut Vec<usize>,
    ) -> Result<Sheet, PackError> {
        let mut sheet = Sheet::new(index, &self.config);
        let mut n_selections = 0;

        while !pool.is_empty() {
            if n_selections >= self.config.selection_limit {
                warn!(
                    "[PACK] sheet {index} reached the selection limit of {}, sealing it",
                    self.config.selection_limit
                );
                break;
            }
            let Some(candidate) = selector::select(&sheet, batch, pool) else {
                break;
            };
            let item = batch.item(candidate.item_index);
            let placement = sheet.place(
                candidate.item_index,
                item,
                candidate.orientation,
                candidate.position,
            )?;
            debug!(
                "[PACK] sheet {index}: placed {} at {} ({:?}), score: {:.6}, weight: {}",
                item.id,
                placement.rect.top_left(),
                placement.orientation,
                candidate.score,
                placement.cumulative_weight
            );
            pool.remove(candidate.pool_index);
            n_selections += 1;
        }

        if sheet.is_empty() {
            //not even an empty sheet can hold the next item
            let next = batch.item(pool[0]);
            self.check_item(next)?;
            return Err(PackError::ItemExceedsSheet {
                item_id: next.id.clone(),
                width: next.width,
                height: next.height,
                sheet_width: self.config.sheet_width,
                sheet_height: self.config.sheet_height,
            });
        }

        sheet.seal();
        debug!(
            "[PACK] sheet {index} sealed with {} items, weight: {}, free area estimate: {}",
            sheet.placements().len(),
            sheet.weight(),
            sheet.free_space().remaining_area()
        );

        Ok(sheet)
    }
}
