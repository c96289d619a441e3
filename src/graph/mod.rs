//! Commit/file graph built from parsed history.

pub mod builder;
pub mod types;

pub use builder::build_graph;
pub use types::*;
