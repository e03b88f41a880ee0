use std::fmt;

use serde::Serialize;

/// One inter-division interval of a cell's history.
///
/// Holds eleven series sliced out of the parent [`Cell`](crate::model::Cell)
/// by the segmentation pass. The five raw series and `fluorescence_by_area`
/// share one length; the growth series are one element shorter, matching the
/// global offset between raw and growth series. SubCells are never mutated
/// or re-sliced after construction.
#[derive(Debug, Clone, Serialize)]
pub struct SubCell {
    /// 1-based position within the parent cell's subcell sequence.
    pub subcell_nb: u32,

    pub framenbs: Vec<u32>,
    pub length: Vec<f64>,
    pub width: Vec<f64>,
    pub area: Vec<f64>,
    pub fluorescence: Vec<f64>,
    pub fluorescence_by_area: Vec<f64>,

    pub length_growth: Vec<f64>,
    pub width_growth: Vec<f64>,
    pub area_growth: Vec<f64>,
    pub fluorescence_growth: Vec<f64>,
    pub fluorescence_growth_by_area: Vec<f64>,
}

impl SubCell {
    /// Number of frames spanned by this subcell.
    pub fn len(&self) -> usize {
        self.framenbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.framenbs.is_empty()
    }
}

impl fmt::Display for SubCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subcell: {}", self.subcell_nb)
    }
}
