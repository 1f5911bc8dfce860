//! Project domain module.
//!
//! # Module Structure
//!
//! - `model`: Project, chart and patch domain models
//! - `store`: In-memory project store

mod model;
mod store;

pub use model::{ChartDatum, ChartKind, Project, ProjectChart, ProjectKind, ProjectPatch};
pub use store::ProjectStore;
