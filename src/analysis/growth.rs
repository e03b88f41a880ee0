//! Elementwise derivations over a cell's raw series.
//!
//! Growth series are first differences divided by the configured frame
//! interval, so they are one element shorter than the raw series they come
//! from. That offset is load-bearing for segmentation.

use crate::error::AnalysisError;
use crate::model::Cell;

/// Fluorescence normalized by cell area, per frame.
pub fn compute_fluorescence_by_area(cell: &mut Cell) -> &[f64] {
    let series = elementwise_ratio(&cell.fluorescence, &cell.area);
    cell.fluorescence_by_area.insert(series)
}

/// dL/dt over the frame interval, length N-1.
pub fn compute_length_growth(cell: &mut Cell, time_interval_per_frame: f64) -> &[f64] {
    let series = first_difference_rate(&cell.length, time_interval_per_frame);
    cell.length_growth.insert(series)
}

/// dW/dt over the frame interval, length N-1.
pub fn compute_width_growth(cell: &mut Cell, time_interval_per_frame: f64) -> &[f64] {
    let series = first_difference_rate(&cell.width, time_interval_per_frame);
    cell.width_growth.insert(series)
}

/// dA/dt over the frame interval, length N-1.
pub fn compute_area_growth(cell: &mut Cell, time_interval_per_frame: f64) -> &[f64] {
    let series = first_difference_rate(&cell.area, time_interval_per_frame);
    cell.area_growth.insert(series)
}

/// dF/dt over the frame interval, length N-1.
pub fn compute_fluorescence_growth(cell: &mut Cell, time_interval_per_frame: f64) -> &[f64] {
    let series = first_difference_rate(&cell.fluorescence, time_interval_per_frame);
    cell.fluorescence_growth.insert(series)
}

/// Fluorescence growth normalized by area, pairing growth index i with
/// `area[i]`, length N-1.
///
/// Requires [`compute_fluorescence_growth`] to have run first.
pub fn compute_fluorescence_growth_by_area(cell: &mut Cell) -> Result<&[f64], AnalysisError> {
    let growth = cell
        .fluorescence_growth
        .as_ref()
        .ok_or(AnalysisError::PreconditionNotMet {
            operation: "compute_fluorescence_growth_by_area",
            dependency: "fluorescence_growth",
        })?;
    let series = elementwise_ratio(growth, &cell.area);
    Ok(cell.fluorescence_growth_by_area.insert(series))
}

fn elementwise_ratio(numerator: &[f64], denominator: &[f64]) -> Vec<f64> {
    numerator
        .iter()
        .zip(denominator.iter())
        .map(|(x, y)| x / y)
        .collect()
}

fn first_difference_rate(series: &[f64], time_interval_per_frame: f64) -> Vec<f64> {
    series
        .windows(2)
        .map(|w| (w[1] - w[0]) / time_interval_per_frame)
        .collect()
}
