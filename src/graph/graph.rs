use crate::{
    error::{Err, Result},
    types::{Edge, VId},
};
use std::collections::{HashMap, HashSet};

/// An immutable, simple, undirected and unweighted graph.
///
/// The vertex order given at construction is kept: it decides pair
/// iteration and the order of ties in rankings.
#[derive(Debug, Clone)]
pub struct CentralityGraph {
    vertices: Vec<VId>,
    edges: Vec<Edge>,
    index: HashMap<VId, usize>,
    adjacency: Vec<Vec<usize>>,
}

fn canonical((u, v): Edge) -> Edge {
    (u.min(v), u.max(v))
}

fn check_vertices(vertices: &[VId]) -> Result<HashMap<VId, usize>> {
    let mut index = HashMap::with_capacity(vertices.len());
    for (pos, &vid) in vertices.iter().enumerate() {
        if index.insert(vid, pos).is_some() {
            return Err(Err::DuplicateVertex(vid));
        }
    }
    Ok(index)
}

fn check_edges(index: &HashMap<VId, usize>, edges: &[Edge]) -> Result<()> {
    if let Some(&(u, v)) = edges
        .iter()
        .find(|(u, v)| !index.contains_key(u) || !index.contains_key(v))
    {
        return Err(Err::DanglingEdge(u, v));
    }
    let mut edge_set = HashSet::with_capacity(edges.len());
    for &(u, v) in edges {
        if !edge_set.insert((u, v)) {
            return Err(Err::DuplicateEdge(u, v));
        }
    }
    Ok(())
}

fn create_adjacency(index: &HashMap<VId, usize>, edges: &[Edge]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); index.len()];
    for (u, v) in edges {
        let (u, v) = (index[u], index[v]);
        adjacency[u].push(v);
        if u != v {
            adjacency[v].push(u);
        }
    }
    adjacency
}

impl CentralityGraph {
    /// Creates a graph, canonicalizing every edge to `(min, max)`.
    ///
    /// Fails on duplicate vertices, on edges with an endpoint outside
    /// `vertices` and on duplicate edges, in that order.
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = VId>,
        E: IntoIterator<Item = Edge>,
    {
        let vertices: Vec<VId> = vertices.into_iter().collect();
        let edges: Vec<Edge> = edges.into_iter().map(canonical).collect();
        let index = check_vertices(&vertices)?;
        check_edges(&index, &edges)?;
        let adjacency = create_adjacency(&index, &edges);
        Ok(Self {
            vertices,
            edges,
            index,
            adjacency,
        })
    }

    pub fn vertices(&self) -> &[VId] {
        &self.vertices
    }

    /// Canonical edges in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vid: VId) -> bool {
        self.index.contains_key(&vid)
    }

    /// Neighbors of `vid`, in the order their edges were given.
    pub fn neighbors(&self, vid: VId) -> Result<impl Iterator<Item = VId> + '_> {
        let pos = self.position(vid)?;
        Ok(self.adjacency[pos].iter().map(move |&n| self.vertices[n]))
    }
}

// crate-internal dense index access.
impl CentralityGraph {
    pub(crate) fn position(&self, vid: VId) -> Result<usize> {
        self.index
            .get(&vid)
            .copied()
            .ok_or(Err::UnknownVertex(vid))
    }

    pub(crate) fn vid(&self, pos: usize) -> VId {
        self.vertices[pos]
    }

    pub(crate) fn adjacent(&self, pos: usize) -> &[usize] {
        &self.adjacency[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let graph = CentralityGraph::new(vec![3, 1, 2], vec![(2, 1), (3, 2)]).unwrap();
        assert_eq!(graph.vertices(), &[3, 1, 2]);
        assert_eq!(graph.edges(), &[(1, 2), (2, 3)]);
        assert_eq!(graph.len(), 3);
        assert!(graph.contains(3));
        assert!(!graph.contains(4));
        assert_eq!(graph.neighbors(2).unwrap().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(graph.neighbors(3).unwrap().collect::<Vec<_>>(), vec![2]);
        assert!(matches!(graph.neighbors(4), Err(Err::UnknownVertex(4))));
    }

    #[test]
    fn test_new_empty() {
        let graph = CentralityGraph::new(vec![], vec![]).unwrap();
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_check_vertices() {
        assert_eq!(
            CentralityGraph::new(vec![1, 2, 2], vec![]).unwrap_err(),
            Err::DuplicateVertex(2)
        );
    }

    #[test]
    fn test_check_edges() {
        assert_eq!(
            CentralityGraph::new(vec![1, 2, 3], vec![(1, 7)]).unwrap_err(),
            Err::DanglingEdge(1, 7)
        );
        assert_eq!(
            CentralityGraph::new(vec![1, 2, 3], vec![(1, 2), (2, 3), (2, 1)]).unwrap_err(),
            Err::DuplicateEdge(1, 2)
        );
        assert_eq!(
            CentralityGraph::new(vec![1, 1], vec![(1, 7)]).unwrap_err(),
            Err::DuplicateVertex(1)
        );
        assert_eq!(
            CentralityGraph::new(vec![1, 2], vec![(1, 2), (1, 2), (2, 9)]).unwrap_err(),
            Err::DanglingEdge(2, 9)
        );
    }

    #[test]
    fn test_self_loop() {
        let graph = CentralityGraph::new(vec![1, 2], vec![(1, 1), (1, 2)]).unwrap();
        assert_eq!(graph.neighbors(1).unwrap().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.neighbors(2).unwrap().collect::<Vec<_>>(), vec![1]);
    }
}
