use thiserror::Error;

/// Error conditions raised by the analysis passes.
///
/// Every variant is a distinct, catchable condition; nothing in the crate
/// swallows one of these and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An operation was invoked before the series it depends on was computed.
    #[error("{operation} requires {dependency} to be computed first")]
    PreconditionNotMet {
        operation: &'static str,
        dependency: &'static str,
    },

    /// Ancestry resolution referenced a cell number absent from the
    /// ancestry map (a broken lineage record).
    #[error("cell {cell_nb} is not present in the ancestry map")]
    LookupFailure { cell_nb: u32 },

    /// The ancestry walk revisited a cell number, so the family tree
    /// contains a cycle.
    #[error("ancestry walk revisited cell {cell_nb}: family tree is cyclic")]
    CycleDetected { cell_nb: u32 },

    /// An input series does not have the length the cell's frame axis
    /// demands.
    #[error("series `{series}` has length {actual}, expected {expected}")]
    ShapeMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}
