use crate::{
    error::{Err, Result},
    graph::CentralityGraph,
    types::VId,
};
use itertools::Itertools;
use log::trace;

impl CentralityGraph {
    /// Returns the betweenness centrality of `node`.
    ///
    /// Sums, over every unordered pair of other vertices connected by a path,
    /// the fraction of their shortest paths that pass through `node`.
    pub fn betweenness_centrality(&self, node: VId) -> Result<f64> {
        let target = self.position(node)?;
        let mut centrality = 0.0;
        for (u, v) in (0..self.len())
            .filter(|&pos| pos != target)
            .tuple_combinations()
        {
            let dist = match self.distance_between(u, v) {
                Some(dist) => dist,
                None => continue,
            };
            let paths = self.shortest_paths_between(u, v, dist);
            if paths.is_empty() {
                continue;
            }
            let through = paths.iter().filter(|path| path.contains(&target)).count();
            trace!(
                "({}, {}): {}/{} shortest paths through {}",
                self.vid(u),
                self.vid(v),
                through,
                paths.len(),
                node
            );
            centrality += through as f64 / paths.len() as f64;
        }
        Ok(centrality)
    }

    /// Returns the betweenness centrality of `node` divided by `(n - 1)(n - 2) / 2`,
    /// the number of vertex pairs excluding `node`.
    ///
    /// Fails with [`Err::DegenerateNormalization`] on graphs with fewer than 3 vertices.
    pub fn standardized_betweenness_centrality(&self, node: VId) -> Result<f64> {
        self.position(node)?;
        let n = self.len();
        if n < 3 {
            return Err(Err::DegenerateNormalization(n));
        }
        let num_pairs = (n - 1) * (n - 2) / 2;
        Ok(self.betweenness_centrality(node)? / num_pairs as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_star() -> CentralityGraph {
        CentralityGraph::new(vec![0, 1, 2, 3, 4], vec![(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap()
    }

    fn create_square() -> CentralityGraph {
        CentralityGraph::new(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap()
    }

    #[test]
    fn test_betweenness_centrality_star() {
        let graph = create_star();
        assert_eq!(graph.betweenness_centrality(0), Ok(6.0));
        assert_eq!(graph.betweenness_centrality(3), Ok(0.0));
        assert_eq!(graph.standardized_betweenness_centrality(0), Ok(1.0));
        assert_eq!(graph.standardized_betweenness_centrality(3), Ok(0.0));
    }

    #[test]
    fn test_betweenness_centrality_square() {
        let graph = create_square();
        for vid in 1..=4 {
            assert_eq!(graph.betweenness_centrality(vid), Ok(0.5));
            assert_eq!(graph.standardized_betweenness_centrality(vid), Ok(0.5 / 3.0));
        }
    }

    #[test]
    fn test_betweenness_centrality_disconnected() {
        let graph = CentralityGraph::new(vec![1, 2, 3, 4, 5], vec![(1, 2), (2, 3), (4, 5)]).unwrap();
        assert_eq!(graph.betweenness_centrality(2), Ok(1.0));
        assert_eq!(graph.betweenness_centrality(4), Ok(0.0));
        assert_eq!(graph.standardized_betweenness_centrality(2), Ok(1.0 / 6.0));
    }

    #[test]
    fn test_degenerate_normalization() {
        let graph = CentralityGraph::new(vec![1, 2], vec![(1, 2)]).unwrap();
        assert_eq!(graph.betweenness_centrality(1), Ok(0.0));
        assert_eq!(
            graph.standardized_betweenness_centrality(1),
            Err(Err::DegenerateNormalization(2))
        );
        assert_eq!(
            graph.standardized_betweenness_centrality(3),
            Err(Err::UnknownVertex(3))
        );
    }
}
