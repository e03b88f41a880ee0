use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::SubCell;

/// One family-tree entry: which mother a given cell number descends from.
///
/// A `mother_nb` of 0 marks the founding ancestor of the lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub cell_nb: u32,
    pub mother_nb: u32,
}

/// One tracked cell across its observed frames, before division-based
/// splitting.
///
/// The raw series are index-aligned to `framenbs` and all share its length N.
/// Derived series start out as `None` and are filled in by the analysis
/// passes; the growth series are one element shorter than the raw series
/// they are differenced from.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub experiment_cell_number: u32,
    pub cell_number: u32,
    pub mother_number: u32,
    pub chamber_nb: u32,

    /// Frame indices, length N. Defines the canonical length for this cell.
    pub framenbs: Vec<u32>,
    /// Nonzero at index i marks a division producing a daughter at frame i.
    pub daughters: Vec<u32>,
    pub length: Vec<f64>,
    pub width: Vec<f64>,
    pub area: Vec<f64>,
    pub fluorescence: Vec<f64>,
    pub family_tree: Vec<FamilyRecord>,

    // Derived series, None until the corresponding pass has run.
    pub fluorescence_by_area: Option<Vec<f64>>,
    pub length_growth: Option<Vec<f64>>,
    pub width_growth: Option<Vec<f64>>,
    pub area_growth: Option<Vec<f64>>,
    pub fluorescence_growth: Option<Vec<f64>>,
    pub fluorescence_growth_by_area: Option<Vec<f64>>,

    pub ancestry_map: Option<HashMap<u32, u32>>,
    pub ancestry: Option<Vec<u32>>,

    pub subcells: Vec<SubCell>,
    /// Data-quality findings recorded while analyzing this cell.
    pub warnings: Vec<String>,
}

impl Cell {
    /// Build a cell from loader output, validating that every raw series
    /// matches the frame axis length.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        experiment_cell_number: u32,
        cell_number: u32,
        mother_number: u32,
        chamber_nb: u32,
        framenbs: Vec<u32>,
        daughters: Vec<u32>,
        length: Vec<f64>,
        width: Vec<f64>,
        area: Vec<f64>,
        fluorescence: Vec<f64>,
        family_tree: Vec<FamilyRecord>,
    ) -> Result<Self, AnalysisError> {
        let n = framenbs.len();
        check_len("daughters", daughters.len(), n)?;
        check_len("length", length.len(), n)?;
        check_len("width", width.len(), n)?;
        check_len("area", area.len(), n)?;
        check_len("fluorescence", fluorescence.len(), n)?;

        Ok(Self {
            experiment_cell_number,
            cell_number,
            mother_number,
            chamber_nb,
            framenbs,
            daughters,
            length,
            width,
            area,
            fluorescence,
            family_tree,
            fluorescence_by_area: None,
            length_growth: None,
            width_growth: None,
            area_growth: None,
            fluorescence_growth: None,
            fluorescence_growth_by_area: None,
            ancestry_map: None,
            ancestry: None,
            subcells: Vec::new(),
            warnings: Vec::new(),
        })
    }

    /// Number of observed frames, N.
    pub fn len(&self) -> usize {
        self.framenbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.framenbs.is_empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "object number: {}, cell number: {}, chamber number: {}",
            self.experiment_cell_number, self.cell_number, self.chamber_nb
        )
    }
}

fn check_len(series: &'static str, actual: usize, expected: usize) -> Result<(), AnalysisError> {
    if actual != expected {
        return Err(AnalysisError::ShapeMismatch {
            series,
            expected,
            actual,
        });
    }
    Ok(())
}
