//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod graph;
pub mod inspect;
pub mod models;
pub mod sweep;

// Re-export main command functions
pub use graph::{execute_graph, validate_args};
pub use inspect::{execute_inspect, render_dump, render_summary};
pub use models::{GraphArgs, InspectArgs, SweepArgs};
pub use sweep::{execute_sweep, validate_sweep_args};
