use anyhow::Result;
use tracing::info;

use crate::analysis::segment;
use crate::config::AnalysisConfig;
use crate::model::Cell;
use crate::pipeline::Stage;

/// Splits the cell's series into subcells at every division event.
pub struct Stage3Segment;

impl Stage3Segment {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Stage3Segment {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Stage3Segment {
    fn name(&self) -> &'static str {
        "stage3_segment"
    }

    fn run(&self, cell: &mut Cell, _config: &AnalysisConfig) -> Result<()> {
        let subcells = segment::create_subcells(cell)?.len();
        info!(
            cell_number = cell.cell_number,
            subcells, "subcells created"
        );
        Ok(())
    }
}
