use crate::{
    error::Result,
    graph::CentralityGraph,
    types::{Path, VId},
};
use std::cmp::Ordering;

impl CentralityGraph {
    /// Finds every simple path from `start` to `end` that continues `prefix`
    /// and holds exactly `dist + 1` vertices, `prefix` included.
    ///
    /// Returns `Ok(None)` if no such path exists.
    ///
    /// The enumeration is exhaustive and exponential in the branching factor;
    /// it is meant to be called with the shortest distance between the two
    /// vertices, which bounds the recursion depth.
    pub fn all_paths(
        &self,
        start: VId,
        end: VId,
        dist: usize,
        prefix: &[VId],
    ) -> Result<Option<Vec<Path>>> {
        let (start, end) = (self.position(start)?, self.position(end)?);
        let prefix = prefix
            .iter()
            .map(|&vid| self.position(vid))
            .collect::<Result<Vec<_>>>()?;
        let paths = self.extend_paths(start, end, dist, prefix);
        Ok(if paths.is_empty() {
            None
        } else {
            Some(paths.iter().map(|path| self.to_path(path)).collect())
        })
    }

    /// Finds every shortest path from `start` to `end`, given their distance `dist`.
    pub fn all_shortest_paths(&self, start: VId, end: VId, dist: usize) -> Result<Vec<Path>> {
        Ok(self.all_paths(start, end, dist, &[])?.unwrap_or_default())
    }
}

// crate-internal methods over dense positions.
impl CentralityGraph {
    pub(crate) fn shortest_paths_between(
        &self,
        start: usize,
        end: usize,
        dist: usize,
    ) -> Vec<Vec<usize>> {
        self.extend_paths(start, end, dist, Vec::with_capacity(dist + 1))
    }

    fn extend_paths(
        &self,
        current: usize,
        end: usize,
        dist: usize,
        mut path: Vec<usize>,
    ) -> Vec<Vec<usize>> {
        path.push(current);
        match path.len().cmp(&(dist + 1)) {
            Ordering::Greater => vec![],
            Ordering::Equal if current == end => vec![path],
            Ordering::Equal => vec![],
            Ordering::Less => self
                .adjacent(current)
                .iter()
                .filter(|&&n| !path.contains(&n))
                .flat_map(|&n| self.extend_paths(n, end, dist, path.clone()))
                .collect(),
        }
    }

    fn to_path(&self, path: &[usize]) -> Path {
        path.iter().map(|&pos| self.vid(pos)).collect()
    }
}
