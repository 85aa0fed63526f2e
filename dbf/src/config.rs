use serde::{Deserialize, Serialize};
use sheetpack::util::PackConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the DBF (Density Best Fit) driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DBFConfig {
    /// Sheet dimensions, item margin, weight capacity and selection limit
    pub pack_config: PackConfig,
    /// Pack independent batches in parallel
    pub parallel: bool,
    /// Append the cumulative sheet weight to every line of the CSV solution
    pub csv_cumulative_weight: bool,
    /// Write an SVG for every sheet of every batch
    pub svg_export: bool,
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for DBFConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            parallel: true,
            csv_cumulative_weight: true,
            svg_export: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
