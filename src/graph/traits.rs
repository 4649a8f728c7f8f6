use std::fmt::{self, Debug, Display};
use num_traits::{PrimInt, Unsigned};
use crate::{Error, Result};

/// Stable handle of a vertex: its index in the owning graph's vertex arena.
///
/// Marking tables are laid out in the same order, so a `VertexId` addresses
/// the marking of the vertex as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the arena index behind the handle
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait representing a labeled, weighted directed graph
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Returns the label of a vertex
    fn label(&self, vertex: VertexId) -> Result<&str>;

    /// Optional lookup of a vertex by exact label match
    fn find(&self, label: &str) -> Option<VertexId>;

    /// Resolves a label to its vertex, failing with `NotFound` if absent
    fn resolve(&self, label: &str) -> Result<VertexId> {
        self.find(label)
            .ok_or_else(|| Error::NotFound(label.to_string()))
    }

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;
}

/// Trait for building a graph before any run starts
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Adds a vertex with a unique label and returns its ID
    fn add_vertex(&mut self, label: &str) -> Result<VertexId>;

    /// Adds a directed edge from `from` to the vertex labeled `to_label`
    fn add_edge(&mut self, from: VertexId, to_label: &str, weight: W) -> Result<()> {
        let to = self.resolve(to_label)?;
        self.add_edge_between(from, to, weight)
    }

    /// Adds a directed edge between two existing vertices
    fn add_edge_between(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()>;
}
