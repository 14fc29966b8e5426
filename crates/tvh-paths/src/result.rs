use std::collections::HashMap;

use tvh_core::{Distance, TemporalHypergraph, Timing, VertexIdx};

use crate::semantics::{Label, Semantics};
use crate::TraversalStats;

/// Raw output of one traversal, indexed by vertex handle.
pub(crate) struct Outcome<T> {
    pub(crate) best: Vec<Option<Label<T>>>,
    pub(crate) stats: TraversalStats,
}

impl<T: Timing> Outcome<T> {
    /// Maps every reached vertex identifier to its distance. The source never
    /// receives a label, so it is never a key.
    pub(crate) fn into_distances<G>(
        self,
        graph: &G,
        semantics: &Semantics<T>,
    ) -> HashMap<G::Vertex, Distance<T>>
    where
        G: TemporalHypergraph<Timing = T> + ?Sized,
    {
        self.best
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                label.as_ref().map(|label| {
                    let vertex = graph.vertex_at(VertexIdx::from_index(index));
                    (vertex.clone(), semantics.distance(label))
                })
            })
            .collect()
    }
}
