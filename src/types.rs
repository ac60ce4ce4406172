//! Various types related to centrality.

/// The vertex id type.
pub type VId = i64;

/// An undirected edge.
pub type Edge = (VId, VId);

/// A simple path, from its source to its destination.
pub type Path = Vec<VId>;
