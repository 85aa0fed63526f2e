use std::time::Instant;

use anyhow::Result;
use log::info;
use sheetpack::entities::{Batch, BatchSolution};
use sheetpack::io::ext_repr::ExtBatchStats;
use sheetpack::opt::PackingEngine;
use thousands::Separable;

use crate::config::DBFConfig;

/// Density Best Fit (DBF) optimizer: packs every batch of an instance with the [`PackingEngine`].
pub struct DBFOptimizer {
    pub batches: Vec<Batch>,
    pub engine: PackingEngine,
    pub config: DBFConfig,
}

impl DBFOptimizer {
    pub fn new(batches: Vec<Batch>, config: DBFConfig) -> Result<Self> {
        let engine = PackingEngine::new(config.pack_config)?;
        Ok(Self {
            batches,
            engine,
            config,
        })
    }

    pub fn solve(&self) -> Result<Vec<BatchSolution>> {
        let start = Instant::now();

        let solutions = self
            .engine
            .pack_batches(&self.batches, self.config.parallel)?;

        info!(
            "[DBF] packing finished in {:.3}ms: {} items on {} sheets over {} batches",
            start.elapsed().as_secs_f64() * 1000.0,
            solutions
                .iter()
                .map(|s| s.n_placed())
                .sum::<usize>()
                .separate_with_commas(),
            solutions
                .iter()
                .map(|s| s.n_sheets())
                .sum::<usize>()
                .separate_with_commas(),
            self.batches.len().separate_with_commas()
        );

        Ok(solutions)
    }
}

pub fn log_batch_stats(label: Option<&str>, stats: &ExtBatchStats) {
    info!(
        "[DBF] batch {}: {} sheets, avg weight {:.2} ({:.2}% of capacity), avg area {} ({:.2}% of sheet)",
        label.unwrap_or("-"),
        stats.n_sheets.separate_with_commas(),
        stats.avg_weight,
        stats.avg_weight_pct,
        (stats.avg_area.round() as u64).separate_with_commas(),
        stats.avg_area_pct
    );
}
