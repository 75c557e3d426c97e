//! Project scaffolding for cmaker
//!
//! This module contains the components that materialise a project on disk:
//! - `operation`: A single directory creation or file write
//! - `processor`: Builds the ordered plan and executes it

pub mod operation;
pub mod processor;

pub use operation::ScaffoldOperation;
pub use processor::{CollectingReporter, ProjectSpec, Reporter, Scaffolder, StdoutReporter};
