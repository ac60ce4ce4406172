//! Betweenness centrality of undirected, unweighted graphs.
//!
//! A [`graph::CentralityGraph`] is validated once at construction and is
//! immutable afterwards. Every query recomputes its result from scratch:
//! breadth-first distances, exhaustive shortest-path enumeration, per-vertex
//! centrality and the selection of the top-scoring vertices.

pub mod algo;
pub mod error;
pub mod graph;
pub mod types;
