//! Per-cell compute passes: growth-rate derivations, ancestry resolution,
//! and division-based segmentation.

pub mod growth;
pub mod lineage;
pub mod segment;
