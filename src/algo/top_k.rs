use crate::{
    error::{Err, Result},
    graph::CentralityGraph,
    types::VId,
};
use itertools::Itertools;
use log::{debug, info};
use std::cmp::Ordering;

impl CentralityGraph {
    /// Returns every vertex with its standardized betweenness centrality,
    /// highest first.
    ///
    /// Equal scores keep the vertex order of the graph.
    pub fn ranking(&self) -> Result<Vec<(VId, f64)>> {
        if self.len() < 3 {
            return Err(Err::DegenerateNormalization(self.len()));
        }
        info!("ranking {} vertices...", self.len());
        let scores = self
            .vertices()
            .iter()
            .map(|&vid| {
                let score = self.standardized_betweenness_centrality(vid)?;
                debug!("centrality({})={}", vid, score);
                Ok((vid, score))
            })
            .collect::<Result<Vec<_>>>()?;
        info!("ranked");
        Ok(scores
            .into_iter()
            .sorted_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal))
            .collect())
    }

    /// Returns all vertices tied for the highest standardized betweenness centrality.
    pub fn top_k_betweenness_centrality(&self) -> Result<Vec<(VId, f64)>> {
        let ranking = self.ranking()?;
        let max = ranking.first().map(|&(_, score)| score);
        Ok(ranking
            .into_iter()
            .take_while(|&(_, score)| Some(score) == max)
            .collect())
    }
}
