//! Ancestry map construction and lineage reconstruction.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::AnalysisError;
use crate::model::Cell;

/// Build the cell's ancestry map from its family-tree records.
///
/// Duplicate `cell_nb` entries resolve last-write-wins; a duplicate is a
/// data-quality finding, so it is also logged and recorded on the cell.
pub fn make_ancestry_map(cell: &mut Cell) -> &HashMap<u32, u32> {
    let mut ancestry_map = HashMap::with_capacity(cell.family_tree.len());
    for record in &cell.family_tree {
        if ancestry_map.insert(record.cell_nb, record.mother_nb).is_some() {
            warn!(
                cell_nb = record.cell_nb,
                "duplicate family-tree entry, keeping the later record"
            );
            cell.warnings.push(format!(
                "duplicate family-tree entry for cell {}",
                record.cell_nb
            ));
        }
    }
    cell.ancestry_map.insert(ancestry_map)
}

/// Walk the ancestry map from this cell up to the founding ancestor.
///
/// Returns the chain of mothers in walk order. The terminal 0 that marks the
/// founder is not appended. A cell number missing from the map is a broken
/// lineage record; a revisited cell number is a cyclic one. Both halt the
/// walk with an error.
pub fn find_lineage(cell: &mut Cell) -> Result<&[u32], AnalysisError> {
    let ancestry_map =
        cell.ancestry_map
            .as_ref()
            .ok_or(AnalysisError::PreconditionNotMet {
                operation: "find_lineage",
                dependency: "ancestry_map",
            })?;

    let mut ancestry = Vec::new();
    let mut seen = HashSet::new();
    let mut current = cell.cell_number;
    while current != 0 {
        if !seen.insert(current) {
            return Err(AnalysisError::CycleDetected { cell_nb: current });
        }
        let mother = *ancestry_map
            .get(&current)
            .ok_or(AnalysisError::LookupFailure { cell_nb: current })?;
        if mother != 0 {
            ancestry.push(mother);
        }
        current = mother;
    }

    Ok(cell.ancestry.insert(ancestry))
}
