use anyhow::Result;
use tracing::info;

use crate::analysis::lineage;
use crate::config::AnalysisConfig;
use crate::model::Cell;
use crate::pipeline::Stage;

/// Builds the ancestry map and walks it up to the founding ancestor.
pub struct Stage2Lineage;

impl Stage2Lineage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Stage2Lineage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Stage2Lineage {
    fn name(&self) -> &'static str {
        "stage2_lineage"
    }

    fn run(&self, cell: &mut Cell, _config: &AnalysisConfig) -> Result<()> {
        lineage::make_ancestry_map(cell);
        let ancestors = lineage::find_lineage(cell)?.len();
        info!(
            cell_number = cell.cell_number,
            ancestors, "lineage resolved"
        );
        Ok(())
    }
}
