//! The graph and its loaders.

pub use graph::CentralityGraph;
pub use info::GraphInfo;
pub use sqlite3::{read_sqlite3, LoadError};

mod graph;
mod info;
mod sqlite3;
