use crate::graph::traits::{Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use num_traits::{PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed, weighted edge owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    /// Target vertex, referenced by handle rather than ownership
    pub target: VertexId,

    /// Non-negative edge weight
    pub weight: W,
}

/// A labeled vertex together with its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    label: String,
    edges: Vec<Edge<W>>,
}

impl<W> Vertex<W> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing edges in the order they were added
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// A directed graph over labeled vertices using adjacency lists.
///
/// The graph is the sole owner of its vertices; edges refer to their targets
/// through [`VertexId`] handles into the vertex arena. Vertex order is insertion
/// order, which is also the tie-breaking order used when selecting vertices.
#[derive(Debug, Clone)]
pub struct LabeledGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex<W>>,

    /// Label -> vertex lookup
    index: HashMap<String, VertexId>,
}

impl<W> Default for LabeledGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> LabeledGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        LabeledGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        LabeledGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from a list of labels and `(from, to, weight)` triples.
    ///
    /// Vertices are added in the order given, then edges in the order given.
    pub fn from_edges<L, S>(labels: &[L], edges: &[(S, S, W)]) -> Result<Self>
    where
        L: AsRef<str>,
        S: AsRef<str>,
    {
        let mut graph = Self::with_capacity(labels.len());
        for label in labels {
            graph.add_vertex(label.as_ref())?;
        }
        for (from, to, weight) in edges {
            let from = graph.resolve(from.as_ref())?;
            graph.add_edge(from, to.as_ref(), *weight)?;
        }
        Ok(graph)
    }

    /// Gets a vertex by handle
    pub fn vertex(&self, vertex: VertexId) -> Result<&Vertex<W>> {
        self.vertices
            .get(vertex.index())
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    /// Iterates over vertex handles and vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<W>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }
}

impl<W> Graph<W> for LabeledGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    fn label(&self, vertex: VertexId) -> Result<&str> {
        self.vertex(vertex).map(Vertex::label)
    }

    fn find(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(v) = self.vertices.get(vertex.index()) {
            Box::new(v.edges.iter().map(|e| (e.target, e.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for LabeledGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn add_vertex(&mut self, label: &str) -> Result<VertexId> {
        if self.index.contains_key(label) {
            return Err(Error::DuplicateLabel(label.to_string()));
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            label: label.to_string(),
            edges: Vec::new(),
        });
        self.index.insert(label.to_string(), id);
        Ok(id)
    }

    fn add_edge_between(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to.index()));
        }

        // Parallel edges are kept; each one is relaxed on its own
        let source = self
            .vertices
            .get_mut(from.index())
            .ok_or(Error::InvalidVertex(from.index()))?;
        source.edges.push(Edge { target: to, weight });
        Ok(())
    }
}
