//! Vertex-frontier traversal: the queue holds `(vertex, label)` pairs.

use tvh_core::{EdgeIdx, TemporalHypergraph, VertexIdx};

use crate::frontier::{Frontier, ParetoSet};
use crate::result::Outcome;
use crate::semantics::{Label, Semantics};
use crate::TraversalStats;

pub(crate) fn traverse<G>(
    graph: &G,
    source: VertexIdx,
    semantics: &Semantics<G::Timing>,
) -> Outcome<G::Timing>
where
    G: TemporalHypergraph + ?Sized,
{
    let mut search = Search {
        graph,
        source,
        semantics,
        labels: vec![ParetoSet::default(); graph.vertex_count()],
        frontier: Frontier::new(),
        relaxations: 0,
    };
    let mut best = vec![None; graph.vertex_count()];
    let mut pops = 0;

    for &edge in graph.incident_hyperedges(source) {
        if let Some(label) = semantics.first_hop(graph.timing_at(edge)) {
            search.reach_members(edge, source, label);
        }
    }

    while let Some((_, (vertex, label))) = search.frontier.pop() {
        if !search.labels[vertex.index()].contains(&label) {
            continue;
        }
        pops += 1;
        // Keys pop in non-decreasing order, so the first label settles it.
        let slot = &mut best[vertex.index()];
        if slot.is_none() {
            *slot = Some(label);
        }
        for &edge in graph.incident_hyperedges(vertex) {
            if let Some(next) = semantics.extend(&label, graph.timing_at(edge)) {
                search.reach_members(edge, vertex, next);
            }
        }
    }

    Outcome {
        best,
        stats: TraversalStats {
            pops,
            relaxations: search.relaxations,
            pushes: search.frontier.pushed(),
        },
    }
}

struct Search<'a, G: TemporalHypergraph + ?Sized> {
    graph: &'a G,
    source: VertexIdx,
    semantics: &'a Semantics<G::Timing>,
    labels: Vec<ParetoSet<G::Timing>>,
    frontier: Frontier<G::Timing, (VertexIdx, Label<G::Timing>)>,
    relaxations: u64,
}

impl<G: TemporalHypergraph + ?Sized> Search<'_, G> {
    /// Offers `label` to every member of `edge` other than `from` and the
    /// source.
    fn reach_members(&mut self, edge: EdgeIdx, from: VertexIdx, label: Label<G::Timing>) {
        for &member in self.graph.incident_vertices(edge) {
            if member == from || member == self.source {
                continue;
            }
            self.relaxations += 1;
            if self.labels[member.index()].insert(label, self.semantics) {
                self.frontier
                    .push(self.semantics.distance(&label), (member, label));
            }
        }
    }
}
