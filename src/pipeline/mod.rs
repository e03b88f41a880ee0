//! Per-cell analysis orchestration.
//!
//! Each cell runs through an ordered sequence of stages; derivations come
//! before segmentation, which depends on them. A stage failure stops the
//! sequence for that cell.

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::model::{Cell, Chamber};

pub mod stage1_growth;
pub mod stage2_lineage;
pub mod stage3_segment;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, cell: &mut Cell, config: &AnalysisConfig) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn run(&self, cell: &mut Cell, config: &AnalysisConfig) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(
                stage = stage.name(),
                cell_number = cell.cell_number,
                "stage started"
            );
            if let Err(err) = stage.run(cell, config) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    cell_number = cell.cell_number,
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                cell_number = cell.cell_number,
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// The full analysis sequence: growth derivations, lineage, segmentation.
pub fn standard_pipeline() -> Pipeline {
    Pipeline::new(vec![
        Box::new(stage1_growth::Stage1Growth::new()),
        Box::new(stage2_lineage::Stage2Lineage::new()),
        Box::new(stage3_segment::Stage3Segment::new()),
    ])
}

/// Run the standard pipeline on one cell.
pub fn analyze_cell(cell: &mut Cell, config: &AnalysisConfig) -> Result<()> {
    standard_pipeline().run(cell, config)
}

/// Run the standard pipeline on every cell of a chamber, in order.
pub fn analyze_chamber(chamber: &mut Chamber, config: &AnalysisConfig) -> Result<()> {
    let pipeline = standard_pipeline();
    for cell in &mut chamber.cells {
        let cell_number = cell.cell_number;
        pipeline.run(cell, config).with_context(|| {
            format!(
                "analyzing cell {} in chamber {}",
                cell_number, chamber.chamber_nb
            )
        })?;
    }
    Ok(())
}
