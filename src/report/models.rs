use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};
use serde::{Deserialize, Serialize};

use crate::algorithm::path::path_to;
use crate::data_structures::MarkingTable;
use crate::graph::{Graph, LabeledGraph};
use crate::{Error, Result};

/// An outgoing edge in the graph report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub target: String,
    pub weight: u64,
}

/// A vertex and its outgoing edges in the graph report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexEdgesReport {
    pub label: String,
    pub edges: Vec<EdgeReport>,
}

/// The loaded graph, in vertex insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphReport {
    pub vertices: Vec<VertexEdgesReport>,
}

/// Final marking of one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexReport {
    pub label: String,
    /// `None` when the vertex is unreachable
    pub distance: Option<u64>,
    pub predecessor: Option<String>,
    pub explored: bool,
    /// Labels from the source to this vertex, `None` when unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

/// Shortest-path tree of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathReport {
    pub source: String,
    pub vertices: Vec<VertexReport>,
    pub reachable: usize,
    pub explored: usize,
}

/// Everything the CLI prints for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphReport>,
    pub shortest_paths: ShortestPathReport,
}

fn weight_to_u64<W: PrimInt + Debug>(weight: W) -> Result<u64> {
    weight
        .to_u64()
        .ok_or_else(|| Error::WeightConversion(format!("{weight:?}")))
}

impl GraphReport {
    pub fn from_graph<W>(graph: &LabeledGraph<W>) -> Result<Self>
    where
        W: PrimInt + Unsigned + Debug,
    {
        let vertices = graph
            .vertices()
            .map(|(_, vertex)| -> Result<VertexEdgesReport> {
                let edges = vertex
                    .edges()
                    .iter()
                    .map(|edge| -> Result<EdgeReport> {
                        let target = graph.label(edge.target)?.to_string();
                        let weight = weight_to_u64(edge.weight)?;
                        Ok(EdgeReport { target, weight })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(VertexEdgesReport {
                    label: vertex.label().to_string(),
                    edges,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GraphReport { vertices })
    }
}

impl ShortestPathReport {
    pub fn from_table<W>(table: &MarkingTable<W>) -> Result<Self>
    where
        W: PrimInt + Unsigned + Debug,
    {
        let source = table.get_by_id(table.source())?.label.clone();

        let vertices = table
            .iter()
            .map(|(id, marking)| -> Result<VertexReport> {
                let distance = marking
                    .distance
                    .map(weight_to_u64)
                    .transpose()?;
                let path = match path_to(table, id) {
                    Ok(path) => Some(path),
                    Err(Error::Unreachable(_)) => None,
                    Err(e) => return Err(e),
                };
                Ok(VertexReport {
                    label: marking.label.clone(),
                    distance,
                    predecessor: table.predecessor_label(id)?.map(str::to_string),
                    explored: marking.explored,
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ShortestPathReport {
            source,
            vertices,
            reachable: table.reachable_count(),
            explored: table.explored_count(),
        })
    }
}

impl RunReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
