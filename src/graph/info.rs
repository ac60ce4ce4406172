use super::CentralityGraph;
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "{} {}", num_vertices, num_edges)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
}

impl GraphInfo {
    pub fn new(graph: &CentralityGraph) -> Self {
        Self {
            num_vertices: graph.len(),
            num_edges: graph.edges().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let graph = CentralityGraph::new(vec![1, 2, 3], vec![(1, 2), (3, 2)]).unwrap();
        assert_eq!(GraphInfo::new(&graph).to_string(), "3 2");
        let graph = CentralityGraph::new(vec![1, 2], vec![(1, 1), (2, 1)]).unwrap();
        assert_eq!(GraphInfo::new(&graph).to_string(), "2 2");
    }
}
