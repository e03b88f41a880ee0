//! Division-based segmentation: splitting one cell's series into subcells.

use tracing::debug;

use crate::error::AnalysisError;
use crate::model::{Cell, SubCell};

/// Partition all eleven of the cell's series into consecutive [`SubCell`]s,
/// splitting immediately before every frame with a nonzero division marker.
///
/// A marker on the very first frame never opens a split; that frame is
/// absorbed into the first subcell. All six derived series must already be
/// computed, otherwise this fails with
/// [`PreconditionNotMet`](AnalysisError::PreconditionNotMet).
pub fn create_subcells(cell: &mut Cell) -> Result<&[SubCell], AnalysisError> {
    let fluorescence_by_area = require(&cell.fluorescence_by_area, "fluorescence_by_area")?;
    let length_growth = require(&cell.length_growth, "length_growth")?;
    let width_growth = require(&cell.width_growth, "width_growth")?;
    let area_growth = require(&cell.area_growth, "area_growth")?;
    let fluorescence_growth = require(&cell.fluorescence_growth, "fluorescence_growth")?;
    let fluorescence_growth_by_area = require(
        &cell.fluorescence_growth_by_area,
        "fluorescence_growth_by_area",
    )?;

    // The growth series all share length N-1; slicing clamps against it so
    // the final run can never reach past the end.
    let growth_len = cell.framenbs.len().saturating_sub(1);

    let mut subcells = Vec::new();
    let mut current_position = 0;
    for run_length in division_runs(&cell.daughters) {
        let end_position = current_position + run_length;
        let growth_end = (end_position - 1).min(growth_len);

        subcells.push(SubCell {
            subcell_nb: subcells.len() as u32 + 1,
            framenbs: cell.framenbs[current_position..end_position].to_vec(),
            length: cell.length[current_position..end_position].to_vec(),
            width: cell.width[current_position..end_position].to_vec(),
            area: cell.area[current_position..end_position].to_vec(),
            fluorescence: cell.fluorescence[current_position..end_position].to_vec(),
            fluorescence_by_area: fluorescence_by_area[current_position..end_position].to_vec(),
            length_growth: length_growth[current_position..growth_end].to_vec(),
            width_growth: width_growth[current_position..growth_end].to_vec(),
            area_growth: area_growth[current_position..growth_end].to_vec(),
            fluorescence_growth: fluorescence_growth[current_position..growth_end].to_vec(),
            fluorescence_growth_by_area: fluorescence_growth_by_area
                [current_position..growth_end]
                .to_vec(),
        });

        current_position = end_position;
    }

    debug!(
        cell_number = cell.cell_number,
        subcells = subcells.len(),
        "segmentation complete"
    );
    cell.subcells = subcells;
    Ok(&cell.subcells)
}

/// Lengths of the consecutive runs of the division-marker series.
///
/// A new run opens at every index i > 0 with a nonzero marker; index 0
/// always opens the first run. The run lengths sum to the series length.
fn division_runs(daughters: &[u32]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut run_length = 0;
    for (i, &marker) in daughters.iter().enumerate() {
        if i > 0 && marker != 0 {
            runs.push(run_length);
            run_length = 0;
        }
        run_length += 1;
    }
    if run_length > 0 {
        runs.push(run_length);
    }
    runs
}

fn require<'a>(
    series: &'a Option<Vec<f64>>,
    dependency: &'static str,
) -> Result<&'a [f64], AnalysisError> {
    series
        .as_deref()
        .ok_or(AnalysisError::PreconditionNotMet {
            operation: "create_subcells",
            dependency,
        })
}
