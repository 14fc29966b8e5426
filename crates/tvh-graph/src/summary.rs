use serde::Serialize;
use tvh_core::{EdgeIdx, EntityId, TemporalHypergraph, Timing, VertexIdx};

use crate::hypergraph::TimeVaryingHypergraph;

/// Structural overview of a hypergraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypergraphSummary<T> {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of hyperedges.
    pub hyperedges: usize,
    /// Total number of vertex/hyperedge incidences.
    pub incidences: usize,
    /// Vertices contained in no hyperedge.
    pub isolated_vertices: usize,
    /// Vertices contained in exactly one hyperedge.
    pub pendant_vertices: usize,
    /// Hyperedges without vertices.
    pub empty_hyperedges: usize,
    /// Hyperedges with exactly one vertex.
    pub singleton_hyperedges: usize,
    /// Largest hyperedge arity.
    pub max_arity: usize,
    /// Mean hyperedge arity, zero without hyperedges.
    pub mean_arity: f64,
    /// Largest vertex degree.
    pub max_degree: usize,
    /// Mean vertex degree, zero without vertices.
    pub mean_degree: f64,
    /// Earliest hyperedge timing.
    pub earliest: Option<T>,
    /// Latest hyperedge timing.
    pub latest: Option<T>,
}

/// Computes the structural summary of `graph`.
pub fn summarize<V, H, T>(graph: &TimeVaryingHypergraph<V, H, T>) -> HypergraphSummary<T>
where
    V: EntityId,
    H: EntityId,
    T: Timing,
{
    let mut summary = HypergraphSummary {
        vertices: graph.vertex_count(),
        hyperedges: graph.hyperedge_count(),
        incidences: 0,
        isolated_vertices: 0,
        pendant_vertices: 0,
        empty_hyperedges: 0,
        singleton_hyperedges: 0,
        max_arity: 0,
        mean_arity: 0.0,
        max_degree: 0,
        mean_degree: 0.0,
        earliest: None,
        latest: None,
    };
    for index in 0..graph.vertex_count() {
        let degree = graph.incident_hyperedges(VertexIdx::from_index(index)).len();
        summary.incidences += degree;
        summary.max_degree = summary.max_degree.max(degree);
        match degree {
            0 => summary.isolated_vertices += 1,
            1 => summary.pendant_vertices += 1,
            _ => {}
        }
    }
    for index in 0..graph.hyperedge_count() {
        let arity = graph.incident_vertices(EdgeIdx::from_index(index)).len();
        summary.max_arity = summary.max_arity.max(arity);
        match arity {
            0 => summary.empty_hyperedges += 1,
            1 => summary.singleton_hyperedges += 1,
            _ => {}
        }
    }
    if summary.hyperedges > 0 {
        summary.mean_arity = summary.incidences as f64 / summary.hyperedges as f64;
    }
    if summary.vertices > 0 {
        summary.mean_degree = summary.incidences as f64 / summary.vertices as f64;
    }
    if let Some((earliest, latest)) = graph.timing_range() {
        summary.earliest = Some(earliest);
        summary.latest = Some(latest);
    }
    summary
}
