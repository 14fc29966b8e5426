#![deny(missing_docs)]
#![doc = "Single-source minimal temporal paths on time-varying hypergraphs."]

//! Two traversals are provided. The vertex frontier pops `(vertex, label)`
//! pairs and relaxes every member of each causal hyperedge, costing roughly
//! `Σ|h|²`. The hyperedge frontier pops hyperedges and costs roughly
//! `Σdeg(v)²`. Both return the exact optimum over time-respecting walks, so
//! they always agree.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tvh_core::{
    Distance, DistanceType, EdgeIdx, ErrorInfo, TemporalHypergraph, Timing, TvhError, VertexIdx,
};

mod frontier;
mod hyperedges;
mod result;
mod semantics;
mod vertices;

use semantics::Semantics;

/// Distances from a source to every vertex reachable from it.
pub type DistanceMap<V, T> = HashMap<V, Distance<T>>;

/// Frontier strategy used by [`minimal_paths`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Pop vertices; suits hypergraphs of low arity.
    Vertices,
    /// Pop hyperedges; suits hypergraphs of low vertex degree.
    Hyperedges,
    /// Pick whichever of the two is estimated cheaper for the graph.
    #[default]
    Auto,
}

impl Traversal {
    /// Picks the concrete traversal with the smaller relaxation estimate.
    /// Ties go to [`Traversal::Vertices`].
    pub fn cheaper_for<G: TemporalHypergraph + ?Sized>(graph: &G) -> Traversal {
        let by_arity = (0..graph.hyperedge_count())
            .map(|edge| graph.incident_vertices(EdgeIdx::from_index(edge)).len())
            .fold(0, sum_of_squares);
        let by_degree = (0..graph.vertex_count())
            .map(|vertex| graph.incident_hyperedges(VertexIdx::from_index(vertex)).len())
            .fold(0, sum_of_squares);
        let choice = if by_degree < by_arity {
            Traversal::Hyperedges
        } else {
            Traversal::Vertices
        };
        tracing::debug!(by_arity, by_degree, ?choice, "estimated traversal cost");
        choice
    }

    /// Returns the lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Vertices => "vertices",
            Traversal::Hyperedges => "hyperedges",
            Traversal::Auto => "auto",
        }
    }

    fn resolve<G: TemporalHypergraph + ?Sized>(self, graph: &G) -> Traversal {
        match self {
            Traversal::Auto => Traversal::cheaper_for(graph),
            concrete => concrete,
        }
    }
}

impl Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traversal {
    type Err = TvhError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertices" => Ok(Traversal::Vertices),
            "hyperedges" => Ok(Traversal::Hyperedges),
            "auto" => Ok(Traversal::Auto),
            _ => Err(TvhError::Decode(
                ErrorInfo::new("invalid-traversal", "unknown traversal")
                    .with_context("value", value)
                    .with_hint("expected one of: vertices, hyperedges, auto"),
            )),
        }
    }
}

/// Work counters of a single traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Queue entries expanded, excluding stale ones.
    pub pops: u64,
    /// Candidate labels offered to a vertex or hyperedge.
    pub relaxations: u64,
    /// Queue insertions.
    pub pushes: u64,
}

/// Output of [`minimal_paths`].
#[derive(Debug, Clone)]
pub struct TraversalReport<V, T: Timing> {
    /// Distance of every reached vertex. The source is never a key.
    pub distances: DistanceMap<V, T>,
    /// Concrete traversal that produced the distances.
    pub traversal: Traversal,
    /// Work counters of the traversal.
    pub stats: TraversalStats,
}

/// Computes minimal temporal distances from `source` with the vertex-frontier
/// traversal.
///
/// `min_timing` is an inclusive lower bound on the timing of the first hop.
/// Unreached vertices and the source itself are absent from the result.
///
/// # Errors
///
/// Returns [`TvhError::EntityNotFound`] when `source` is not a vertex of
/// `graph`.
pub fn single_source_dijkstra_vertices<G>(
    graph: &G,
    source: &G::Vertex,
    distance_type: DistanceType,
    min_timing: Option<G::Timing>,
) -> Result<DistanceMap<G::Vertex, G::Timing>, TvhError>
where
    G: TemporalHypergraph + ?Sized,
{
    minimal_paths(graph, source, distance_type, min_timing, Traversal::Vertices)
        .map(|report| report.distances)
}

/// Computes minimal temporal distances from `source` with the
/// hyperedge-frontier traversal. Same contract as
/// [`single_source_dijkstra_vertices`].
///
/// # Errors
///
/// Returns [`TvhError::EntityNotFound`] when `source` is not a vertex of
/// `graph`.
pub fn single_source_dijkstra_hyperedges<G>(
    graph: &G,
    source: &G::Vertex,
    distance_type: DistanceType,
    min_timing: Option<G::Timing>,
) -> Result<DistanceMap<G::Vertex, G::Timing>, TvhError>
where
    G: TemporalHypergraph + ?Sized,
{
    minimal_paths(graph, source, distance_type, min_timing, Traversal::Hyperedges)
        .map(|report| report.distances)
}

/// Runs the requested traversal and reports distances with work counters.
///
/// # Errors
///
/// Returns [`TvhError::EntityNotFound`] when `source` is not a vertex of
/// `graph`.
pub fn minimal_paths<G>(
    graph: &G,
    source: &G::Vertex,
    distance_type: DistanceType,
    min_timing: Option<G::Timing>,
    traversal: Traversal,
) -> Result<TraversalReport<G::Vertex, G::Timing>, TvhError>
where
    G: TemporalHypergraph + ?Sized,
{
    let source_idx = graph.vertex_index(source).ok_or_else(|| {
        TvhError::EntityNotFound(
            ErrorInfo::new("unknown-source", "source vertex does not exist")
                .with_context("vertex", format!("{source:?}")),
        )
    })?;
    let semantics = Semantics::new(distance_type, min_timing);
    let traversal = traversal.resolve(graph);
    let outcome = match traversal {
        Traversal::Hyperedges => hyperedges::traverse(graph, source_idx, &semantics),
        _ => vertices::traverse(graph, source_idx, &semantics),
    };
    let stats = outcome.stats;
    let distances = outcome.into_distances(graph, &semantics);
    tracing::debug!(
        source = ?source,
        distance = %distance_type,
        traversal = %traversal,
        reached = distances.len(),
        pops = stats.pops,
        relaxations = stats.relaxations,
        pushes = stats.pushes,
        "traversal finished"
    );
    Ok(TraversalReport {
        distances,
        traversal,
        stats,
    })
}

fn sum_of_squares(total: u64, len: usize) -> u64 {
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    total.saturating_add(len.saturating_mul(len))
}
