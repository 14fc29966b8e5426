//! Hyperedge-frontier traversal: the queue holds hyperedges keyed by the best
//! walk ending with them.
//!
//! Every walk ending with a hyperedge shares its last timing, so one label per
//! hyperedge is enough. Vertices only remember the labels they were expanded
//! with, to avoid rescanning their hyperedges for dominated arrivals.

use tvh_core::{EdgeIdx, TemporalHypergraph, Timing, VertexIdx};

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
        semantics,
        tentative: vec![None; graph.hyperedge_count()],
        settled: vec![false; graph.hyperedge_count()],
        frontier: Frontier::new(),
        relaxations: 0,
    };
    let mut expanded = vec![ParetoSet::default(); graph.vertex_count()];
    let mut best = vec![None; graph.vertex_count()];
    let mut pops = 0;

    for &edge in graph.incident_hyperedges(source) {
        if let Some(label) = semantics.first_hop(graph.timing_at(edge)) {
            search.offer(edge, label);
        }
    }

    while let Some((_, edge)) = search.frontier.pop() {
        if search.settled[edge.index()] {
            continue;
        }
        let Some(label) = search.tentative[edge.index()] else {
            continue;
        };
        search.settled[edge.index()] = true;
        pops += 1;

        for &member in graph.incident_vertices(edge) {
            if member == source {
                continue;
            }
            let slot = &mut best[member.index()];
            if slot.is_none() {
                *slot = Some(label);
            }
            if !expanded[member.index()].insert(label, semantics) {
                continue;
            }
            for &next_edge in graph.incident_hyperedges(member) {
                if search.settled[next_edge.index()] {
                    continue;
                }
                if let Some(next) = semantics.extend(&label, graph.timing_at(next_edge)) {
                    search.offer(next_edge, next);
                }
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

struct Search<'a, T: Timing> {
    semantics: &'a Semantics<T>,
    tentative: Vec<Option<Label<T>>>,
    settled: Vec<bool>,
    frontier: Frontier<T, EdgeIdx>,
    relaxations: u64,
}

impl<T: Timing> Search<'_, T> {
    /// Records `label` for `edge` when it strictly improves the incumbent.
    fn offer(&mut self, edge: EdgeIdx, label: Label<T>) {
        self.relaxations += 1;
        let slot = &mut self.tentative[edge.index()];
        if slot.is_some_and(|incumbent| !self.semantics.is_better(&label, &incumbent)) {
            return;
        }
        *slot = Some(label);
        self.frontier.push(self.semantics.distance(&label), edge);
    }
}

