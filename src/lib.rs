//! Dijkstra Table - label-setting single-source shortest paths
//!
//! This library runs the classic greedy label-setting algorithm (Dijkstra's
//! algorithm with O(V²) linear-scan selection) over a small, static, labeled,
//! weighted directed graph.
//!
//! The result of a run is a [`MarkingTable`]: one marking per vertex holding the
//! final distance from the source, the explored flag and the predecessor in the
//! shortest-path tree.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod runner;

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraRun, RunState, Selection},
    path::{path_ids_to, path_to, path_to_label},
    ShortestPathAlgorithm,
};
pub use data_structures::{Marking, MarkingTable};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, LabeledGraph, MutableGraph, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    NotFound(String),

    #[error("Vertex {0} is unreachable from the source")]
    Unreachable(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Duplicate vertex label: {0}")]
    DuplicateLabel(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Distance overflow while relaxing edges into {0}")]
    DistanceOverflow(String),

    #[error("Predecessor chain of {0} does not lead back to the source")]
    BrokenPath(String),

    #[error("Weight {0} does not fit in a 64-bit report field")]
    WeightConversion(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
