use crate::{error::Result, graph::CentralityGraph, types::VId};
use std::collections::VecDeque;

impl CentralityGraph {
    /// Returns the number of edges on a shortest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` if there is no path between them.
    pub fn min_dist(&self, start: VId, end: VId) -> Result<Option<usize>> {
        let (start, end) = (self.position(start)?, self.position(end)?);
        Ok(self.distance_between(start, end))
    }
}

// crate-internal methods over dense positions.
impl CentralityGraph {
    pub(crate) fn distance_between(&self, start: usize, end: usize) -> Option<usize> {
        self.distances_from(start)[end]
    }

    /// Breadth-first search from `start`; every vertex is relaxed at most once.
    pub(crate) fn distances_from(&self, start: usize) -> Vec<Option<usize>> {
        let mut dists = vec![None; self.len()];
        dists[start] = Some(0);
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        while let Some(current) = frontier.pop_front() {
            let next = dists[current].map(|d| d + 1);
            for &n in self.adjacent(current) {
                if dists[n].is_none() {
                    dists[n] = next;
                    frontier.push_back(n);
                }
            }
        }
        dists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Err;

    fn create_path_and_island() -> CentralityGraph {
        CentralityGraph::new(vec![1, 2, 3, 4, 5], vec![(1, 2), (3, 2), (3, 4)]).unwrap()
    }

    #[test]
    fn test_min_dist() {
        let graph = create_path_and_island();
        assert_eq!(graph.min_dist(1, 1), Ok(Some(0)));
        assert_eq!(graph.min_dist(1, 2), Ok(Some(1)));
        assert_eq!(graph.min_dist(4, 1), Ok(Some(3)));
        assert_eq!(graph.min_dist(1, 4), Ok(Some(3)));
    }

    #[test]
    fn test_min_dist_unreachable() {
        let graph = create_path_and_island();
        assert_eq!(graph.min_dist(1, 5), Ok(None));
        assert_eq!(graph.min_dist(5, 5), Ok(Some(0)));
    }

    #[test]
    fn test_min_dist_unknown_vertex() {
        let graph = create_path_and_island();
        assert_eq!(graph.min_dist(1, 9), Err(Err::UnknownVertex(9)));
        assert_eq!(graph.min_dist(0, 1), Err(Err::UnknownVertex(0)));
    }

    #[test]
    fn test_distances_from() {
        let graph =
            CentralityGraph::new(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        assert_eq!(
            graph.distances_from(0),
            vec![Some(0), Some(1), Some(2), Some(1)]
        );
    }
}
