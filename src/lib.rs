//! Lineage and division-resolved growth analysis for mother-machine
//! time-lapse microscopy.
//!
//! A tracked [`Cell`] carries per-frame measurement series plus a family-tree
//! record. The analysis passes derive growth-rate series, reconstruct the
//! mother/daughter ancestry chain, and split the cell's history into
//! [`SubCell`] segments at every detected division event. Loading raw
//! experiment data and any reporting layer are left to the caller; this crate
//! only operates on in-memory datasets.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use model::{Cell, Chamber, FamilyRecord, SubCell};
pub use pipeline::{analyze_cell, analyze_chamber, standard_pipeline, Pipeline, Stage};
