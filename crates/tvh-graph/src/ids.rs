use std::collections::BTreeSet;

use tvh_core::VertexIdx;

/// Ensures that the list of vertex handles is sorted and contains no duplicates.
pub(crate) fn canonicalize_vertices(vertices: &[VertexIdx]) -> Vec<VertexIdx> {
    let set: BTreeSet<VertexIdx> = vertices.iter().copied().collect();
    set.into_iter().collect()
}
