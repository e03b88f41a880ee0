use std::fmt;

use serde::Serialize;

use crate::model::Cell;

/// One physical microfluidic chamber and the cells observed inside it.
#[derive(Debug, Clone, Serialize)]
pub struct Chamber {
    pub chamber_nb: u32,
    pub cells: Vec<Cell>,
}

impl Chamber {
    pub fn new(chamber_nb: u32, cells: Vec<Cell>) -> Self {
        Self { chamber_nb, cells }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chamber no: {} contains {} cell objects",
            self.chamber_nb,
            self.cells.len()
        )
    }
}
