//! The centrality pipeline.
//!
//! Each stage is an `impl CentralityGraph` block consumed by the next one:
//! distance, path enumeration, centrality and top-k selection.

mod centrality;
mod distance;
mod paths;
mod top_k;
