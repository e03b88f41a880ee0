//! Domain data types: chambers, tracked cells, and division-delimited
//! subcells.

mod cell;
mod chamber;
mod subcell;

pub use cell::{Cell, FamilyRecord};
pub use chamber::Chamber;
pub use subcell::SubCell;
