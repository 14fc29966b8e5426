use std::collections::HashMap;

use indexmap::IndexSet;
use tvh_core::errors::{ErrorInfo, TvhError};
use tvh_core::{EdgeIdx, EntityId, TemporalHypergraph, Timing, VertexIdx};

use crate::ids::canonicalize_vertices;

#[derive(Debug, Clone)]
pub(crate) struct HyperedgeRecord<T> {
    vertices: Vec<VertexIdx>,
    timing: T,
}

/// Immutable hypergraph whose hyperedges each carry one timing.
///
/// Vertices and hyperedges keep the order in which they were first seen, and
/// the vertex to hyperedge incidence is derived once at construction.
#[derive(Debug, Clone)]
pub struct TimeVaryingHypergraph<V, H, T> {
    vertices: IndexSet<V>,
    hyperedges: IndexSet<H>,
    records: Vec<HyperedgeRecord<T>>,
    incidence: Vec<Vec<EdgeIdx>>,
}

impl<V: EntityId, H: EntityId, T: Timing> TimeVaryingHypergraph<V, H, T> {
    /// Builds a hypergraph from a hyperedge to vertices mapping and a
    /// hyperedge to timing mapping.
    ///
    /// Every hyperedge needs exactly one timing and every timing must belong
    /// to a hyperedge. Repeated vertices inside one hyperedge collapse.
    pub fn new<I, C, J>(hedges: I, timings: J) -> Result<Self, TvhError>
    where
        I: IntoIterator<Item = (H, C)>,
        C: IntoIterator<Item = V>,
        J: IntoIterator<Item = (H, T)>,
    {
        let mut by_hyperedge: HashMap<H, T> = HashMap::new();
        for (hyperedge, timing) in timings {
            if by_hyperedge.contains_key(&hyperedge) {
                return Err(TvhError::Graph(
                    ErrorInfo::new("duplicate-timing", "hyperedge has more than one timing")
                        .with_context("hyperedge", format!("{hyperedge:?}")),
                ));
            }
            by_hyperedge.insert(hyperedge, timing);
        }
        let mut timings = by_hyperedge;
        let mut builder = Builder::default();
        for (hyperedge, members) in hedges {
            let timing = timings.remove(&hyperedge).ok_or_else(|| {
                TvhError::Graph(
                    ErrorInfo::new("missing-timing", "hyperedge has no timing")
                        .with_context("hyperedge", format!("{hyperedge:?}")),
                )
            })?;
            builder.push(hyperedge, members, timing)?;
        }
        if let Some(orphan) = timings.keys().next() {
            return Err(TvhError::Graph(
                ErrorInfo::new("orphan-timing", "timing refers to an unknown hyperedge")
                    .with_context("hyperedge", format!("{orphan:?}"))
                    .with_context("orphans", timings.len().to_string()),
            ));
        }
        Ok(builder.finish())
    }

    /// Builds a hypergraph from `(hyperedge, vertices, timing)` records.
    pub fn from_records<I, C>(records: I) -> Result<Self, TvhError>
    where
        I: IntoIterator<Item = (H, C, T)>,
        C: IntoIterator<Item = V>,
    {
        let mut builder = Builder::default();
        for (hyperedge, members, timing) in records {
            builder.push(hyperedge, members, timing)?;
        }
        Ok(builder.finish())
    }

    /// Adds vertices that are not incident to any hyperedge.
    ///
    /// Vertices already present are left untouched.
    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        for vertex in vertices {
            if self.vertices.insert(vertex) {
                self.incidence.push(Vec::new());
            }
        }
        self
    }

    /// Returns every vertex identifier.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Returns the vertices incident to `hyperedge`.
    ///
    /// An empty hyperedge yields an empty iterator; an unknown one fails with
    /// [`TvhError::EntityNotFound`].
    pub fn vertices_of(
        &self,
        hyperedge: &H,
    ) -> Result<impl ExactSizeIterator<Item = &V> + '_, TvhError> {
        let record = self.record(hyperedge)?;
        Ok(record
            .vertices
            .iter()
            .map(move |vertex| &self.vertices[vertex.index()]))
    }

    /// Returns every hyperedge identifier.
    pub fn hyperedges(&self) -> impl ExactSizeIterator<Item = &H> + '_ {
        self.hyperedges.iter()
    }

    /// Returns the hyperedges incident to `vertex`.
    pub fn hyperedges_of(
        &self,
        vertex: &V,
    ) -> Result<impl ExactSizeIterator<Item = &H> + '_, TvhError> {
        let index = self.require_vertex(vertex)?;
        Ok(self.incidence[index.index()]
            .iter()
            .map(move |edge| self.hyperedge_at(*edge)))
    }

    /// Returns every hyperedge together with its timing.
    pub fn timings(&self) -> impl ExactSizeIterator<Item = (&H, T)> + '_ {
        self.hyperedges
            .iter()
            .zip(&self.records)
            .map(|(hyperedge, record)| (hyperedge, record.timing))
    }

    /// Returns the timing of `hyperedge`.
    pub fn timing(&self, hyperedge: &H) -> Result<T, TvhError> {
        Ok(self.record(hyperedge)?.timing)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of hyperedges.
    pub fn hyperedge_count(&self) -> usize {
        self.hyperedges.len()
    }

    /// Returns whether `vertex` belongs to the hypergraph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns whether `hyperedge` belongs to the hypergraph.
    pub fn contains_hyperedge(&self, hyperedge: &H) -> bool {
        self.hyperedges.contains(hyperedge)
    }

    /// Returns the number of hyperedges incident to `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize, TvhError> {
        let index = self.require_vertex(vertex)?;
        Ok(self.incidence[index.index()].len())
    }

    /// Returns the number of vertices incident to `hyperedge`.
    pub fn arity(&self, hyperedge: &H) -> Result<usize, TvhError> {
        Ok(self.record(hyperedge)?.vertices.len())
    }

    /// A vertex is isolated when no hyperedge contains it.
    pub fn is_isolated(&self, vertex: &V) -> Result<bool, TvhError> {
        Ok(self.degree(vertex)? == 0)
    }

    /// A vertex is pendant when exactly one hyperedge contains it.
    pub fn is_pendant(&self, vertex: &V) -> Result<bool, TvhError> {
        Ok(self.degree(vertex)? == 1)
    }

    /// A hyperedge is empty when it contains no vertex.
    pub fn is_empty_hyperedge(&self, hyperedge: &H) -> Result<bool, TvhError> {
        Ok(self.arity(hyperedge)? == 0)
    }

    /// A hyperedge is a singleton when it contains exactly one vertex.
    pub fn is_singleton(&self, hyperedge: &H) -> Result<bool, TvhError> {
        Ok(self.arity(hyperedge)? == 1)
    }

    /// Resolves a hyperedge identifier to its dense handle.
    pub fn edge_index(&self, hyperedge: &H) -> Option<EdgeIdx> {
        self.hyperedges.get_index_of(hyperedge).map(EdgeIdx::from_index)
    }

    /// Returns the identifier behind a dense hyperedge handle.
    pub fn hyperedge_at(&self, edge: EdgeIdx) -> &H {
        &self.hyperedges[edge.index()]
    }

    /// Returns the earliest and latest timing, or `None` without hyperedges.
    pub fn timing_range(&self) -> Option<(T, T)> {
        let mut timings = self.records.iter().map(|record| record.timing);
        let first = timings.next()?;
        Some(timings.fold((first, first), |(lo, hi), timing| {
            (
                if timing.precedes(&lo) { timing } else { lo },
                if hi.precedes(&timing) { timing } else { hi },
            )
        }))
    }

    fn record(&self, hyperedge: &H) -> Result<&HyperedgeRecord<T>, TvhError> {
        self.edge_index(hyperedge)
            .map(|edge| &self.records[edge.index()])
            .ok_or_else(|| TvhError::unknown_hyperedge(hyperedge))
    }

    fn require_vertex(&self, vertex: &V) -> Result<VertexIdx, TvhError> {
        self.vertex_index(vertex)
            .ok_or_else(|| TvhError::unknown_vertex(vertex))
    }
}

impl<V: EntityId, H: EntityId, T: Timing> TemporalHypergraph for TimeVaryingHypergraph<V, H, T> {
    type Vertex = V;
    type Timing = T;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn hyperedge_count(&self) -> usize {
        self.hyperedges.len()
    }

    fn vertex_index(&self, vertex: &V) -> Option<VertexIdx> {
        self.vertices.get_index_of(vertex).map(VertexIdx::from_index)
    }

    fn vertex_at(&self, vertex: VertexIdx) -> &V {
        &self.vertices[vertex.index()]
    }

    fn incident_hyperedges(&self, vertex: VertexIdx) -> &[EdgeIdx] {
        &self.incidence[vertex.index()]
    }

    fn incident_vertices(&self, edge: EdgeIdx) -> &[VertexIdx] {
        &self.records[edge.index()].vertices
    }

    fn timing_at(&self, edge: EdgeIdx) -> T {
        self.records[edge.index()].timing
    }
}

struct Builder<V, H, T> {
    vertices: IndexSet<V>,
    hyperedges: IndexSet<H>,
    records: Vec<HyperedgeRecord<T>>,
    incidence: Vec<Vec<EdgeIdx>>,
}

impl<V, H, T> Default for Builder<V, H, T> {
    fn default() -> Self {
        Self {
            vertices: IndexSet::new(),
            hyperedges: IndexSet::new(),
            records: Vec::new(),
            incidence: Vec::new(),
        }
    }
}

impl<V: EntityId, H: EntityId, T: Timing> Builder<V, H, T> {
    fn push(
        &mut self,
        hyperedge: H,
        members: impl IntoIterator<Item = V>,
        timing: T,
    ) -> Result<(), TvhError> {
        if self.hyperedges.contains(&hyperedge) {
            return Err(TvhError::Graph(
                ErrorInfo::new("duplicate-hyperedge", "hyperedge listed more than once")
                    .with_context("hyperedge", format!("{hyperedge:?}")),
            ));
        }
        let edge = EdgeIdx::from_index(handle_index(self.hyperedges.len(), "hyperedges")?);
        let mut indices = Vec::new();
        for vertex in members {
            let (index, inserted) = self.vertices.insert_full(vertex);
            let index = match handle_index(index, "vertices") {
                Ok(index) => index,
                Err(err) => {
                    if inserted {
                        self.vertices.pop();
                    }
                    return Err(err);
                }
            };
            if inserted {
                self.incidence.push(Vec::new());
            }
            indices.push(VertexIdx::from_index(index));
        }
        let vertices = canonicalize_vertices(&indices);
        for vertex in &vertices {
            self.incidence[vertex.index()].push(edge);
        }
        self.hyperedges.insert(hyperedge);
        self.records.push(HyperedgeRecord { vertices, timing });
        Ok(())
    }

    fn finish(self) -> TimeVaryingHypergraph<V, H, T> {
        TimeVaryingHypergraph {
            vertices: self.vertices,
            hyperedges: self.hyperedges,
            records: self.records,
            incidence: self.incidence,
        }
    }
}

/// Handles are 32-bit, so positions past `u32::MAX` cannot be addressed.
fn handle_index(index: usize, table: &str) -> Result<usize, TvhError> {
    u32::try_from(index).map(|_| index).map_err(|_| {
        TvhError::Graph(
            ErrorInfo::new("too-many-entities", "entity table exceeds 32-bit handles")
                .with_context("table", table)
                .with_context("index", index.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incidence_lists_are_sorted_and_unique() {
        let graph = TimeVaryingHypergraph::from_records([
            ("e1", vec!["c", "a", "a", "b"], 1i64),
            ("e2", vec!["b"], 2),
        ])
        .unwrap();
        let e1 = graph.edge_index(&"e1").unwrap();
        let members: Vec<_> = graph
            .incident_vertices(e1)
            .iter()
            .map(|v| *graph.vertex_at(*v))
            .collect();
        assert_eq!(members, vec!["c", "a", "b"]);
        let b = graph.vertex_index(&"b").unwrap();
        assert_eq!(graph.incident_hyperedges(b).len(), 2);
    }

    #[test]
    fn duplicate_records_are_rejected() {
        let err = TimeVaryingHypergraph::from_records([
            ("e1", vec!["a"], 1i64),
            ("e1", vec!["b"], 2),
        ])
        .unwrap_err();
        assert_eq!(err.info().code, "duplicate-hyperedge");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn handles_beyond_u32_are_rejected() {
        let max = u32::MAX as usize;
        assert_eq!(handle_index(max, "vertices").unwrap(), max);
        let err = handle_index(max + 1, "hyperedges").unwrap_err();
        assert_eq!(err.info().code, "too-many-entities");
        assert_eq!(err.info().context.get("table").map(String::as_str), Some("hyperedges"));
    }

    #[test]
    fn timing_range_spans_all_hyperedges() {
        let graph = TimeVaryingHypergraph::from_records([
            ("e1", vec!["a"], 5i64),
            ("e2", vec![], 2),
            ("e3", vec!["b"], 9),
        ])
        .unwrap();
        assert_eq!(graph.timing_range(), Some((2, 9)));
    }
}
