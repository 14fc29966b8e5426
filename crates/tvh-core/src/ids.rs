use serde::{Deserialize, Serialize};

/// Dense handle of a vertex inside one hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexIdx(u32);

impl VertexIdx {
    /// Creates a handle from its position in the vertex table.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the position of the vertex in the vertex table.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Dense handle of a hyperedge inside one hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIdx(u32);

impl EdgeIdx {
    /// Creates a handle from its position in the hyperedge table.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the position of the hyperedge in the hyperedge table.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
