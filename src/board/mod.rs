//! Board model: tiles, settlements, and the snapshot handed to analysis.
//!
//! This module provides:
//! - Closed resource and number types (`ResourceType`, `ProductionNumber`)
//! - Per-resource tallies (`ResourceMap`)
//! - Snapshot assembly and validation (`assemble`)
//! - Mock boards for running without a screenshot (`fixtures`)

pub mod assemble;
pub mod fixtures;
pub mod resource;
pub mod types;

pub use assemble::assemble;
pub use fixtures::MockBoard;
pub use resource::{ProductionNumber, ResourceMap, ResourceType};
pub use types::{BoardSnapshot, Point, Settlement, Tile};
