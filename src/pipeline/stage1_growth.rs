use anyhow::Result;
use tracing::info;

use crate::analysis::growth;
use crate::config::AnalysisConfig;
use crate::model::Cell;
use crate::pipeline::Stage;

/// Computes all six derived series: the per-frame fluorescence/area ratio,
/// the four growth rates, and the area-normalized fluorescence growth.
pub struct Stage1Growth;

impl Stage1Growth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Stage1Growth {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Stage1Growth {
    fn name(&self) -> &'static str {
        "stage1_growth"
    }

    fn run(&self, cell: &mut Cell, config: &AnalysisConfig) -> Result<()> {
        let interval = config.time_interval_per_frame;
        growth::compute_fluorescence_by_area(cell);
        growth::compute_length_growth(cell, interval);
        growth::compute_width_growth(cell, interval);
        growth::compute_area_growth(cell, interval);
        growth::compute_fluorescence_growth(cell, interval);
        growth::compute_fluorescence_growth_by_area(cell)?;
        info!(cell_number = cell.cell_number, "derived series ready");
        Ok(())
    }
}
