use crate::entities::{Batch, BatchSolution, Placement};
use crate::io::ext_repr::{ExtBatchSolution, ExtBatchStats, ExtPlacementRow, ExtSolution};
use crate::util::PackConfig;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Projects a placement back onto the item it represents.
/// The stored rectangle includes the margin band,
/// the exported position is the corner of the item itself.
pub fn export_placement(
    placement: &Placement,
    sheet_index: usize,
    batch: &Batch,
    margin: f32,
) -> ExtPlacementRow {
    let item = batch.item(placement.item_index);
    let position = placement.rect.top_left().translate(margin, margin);

    ExtPlacementRow {
        sheet: sheet_index,
        id: item.id.clone(),
        timestamp: item.timestamp,
        x: position.x(),
        y: position.y(),
        cumulative_weight: placement.cumulative_weight,
        rotated: placement.orientation.is_rotated(),
    }
}

/// All placements of the solution as rows, sheet by sheet, in placement order.
pub fn export_rows(
    batch: &Batch,
    solution: &BatchSolution,
    config: &PackConfig,
) -> Vec<ExtPlacementRow> {
    solution
        .sheets
        .iter()
        .flat_map(|sheet| {
            sheet
                .placements()
                .iter()
                .map(|p| export_placement(p, sheet.index, batch, config.margin))
        })
        .collect_vec()
}

pub fn export_stats(batch: &Batch, solution: &BatchSolution, config: &PackConfig) -> ExtBatchStats {
    let n_sheets = solution.n_sheets();
    if n_sheets == 0 {
        return ExtBatchStats::default();
    }
    let avg_weight = solution.total_weight() / n_sheets as f64;
    let avg_area = solution.placed_item_area(batch) / n_sheets as f32;

    ExtBatchStats {
        n_sheets,
        avg_weight,
        avg_weight_pct: avg_weight / config.weight_capacity * 100.0,
        avg_area,
        avg_area_pct: avg_area / config.sheet_area() * 100.0,
    }
}

pub fn export_batch_solution(
    batch: &Batch,
    solution: &BatchSolution,
    config: &PackConfig,
) -> ExtBatchSolution {
    ExtBatchSolution {
        label: solution.label.clone(),
        rows: export_rows(batch, solution, config),
        stats: export_stats(batch, solution, config),
    }
}

/// Exports the solutions of all batches. `solutions[i]` must be the solution of `batches[i]`.
pub fn export(
    batches: &[Batch],
    solutions: &[BatchSolution],
    config: &PackConfig,
) -> Result<ExtSolution> {
    ensure!(
        batches.len() == solutions.len(),
        "every batch needs exactly one solution: {} batches, {} solutions",
        batches.len(),
        solutions.len()
    );
    Ok(ExtSolution {
        batches: batches
            .iter()
            .zip(solutions)
            .map(|(b, s)| export_batch_solution(b, s, config))
            .collect(),
    })
}
