#![deny(missing_docs)]
#![doc = "Core contracts and data types for temporal reachability on time-varying hypergraphs."]

use std::fmt::Debug;
use std::hash::Hash;

pub mod distance;
pub mod errors;
mod ids;
pub mod timing;

pub use distance::{Distance, DistanceType};
pub use errors::{ErrorInfo, TvhError};
pub use ids::{EdgeIdx, VertexIdx};
pub use timing::{Timing, TotalOrder};

/// Bounds shared by vertex and hyperedge identifiers.
pub trait EntityId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> EntityId for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// Index-level contract consumed by the minimal-path engine.
///
/// Handles are dense: vertices are `0..vertex_count()` and hyperedges are
/// `0..hyperedge_count()`. Incidence slices are sorted and duplicate free.
/// Implementations are immutable, so any number of traversals may share one
/// instance across threads.
pub trait TemporalHypergraph: Send + Sync {
    /// Caller-facing vertex identifier.
    type Vertex: EntityId;
    /// Timing scalar attached to every hyperedge.
    type Timing: Timing;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of hyperedges.
    fn hyperedge_count(&self) -> usize;

    /// Resolves a vertex identifier to its dense handle.
    fn vertex_index(&self, vertex: &Self::Vertex) -> Option<VertexIdx>;

    /// Returns the identifier behind a dense vertex handle.
    fn vertex_at(&self, vertex: VertexIdx) -> &Self::Vertex;

    /// Returns the hyperedges incident to a vertex.
    fn incident_hyperedges(&self, vertex: VertexIdx) -> &[EdgeIdx];

    /// Returns the vertices incident to a hyperedge.
    fn incident_vertices(&self, edge: EdgeIdx) -> &[VertexIdx];

    /// Returns the timing of a hyperedge.
    fn timing_at(&self, edge: EdgeIdx) -> Self::Timing;
}
