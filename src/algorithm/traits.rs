use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};
use crate::algorithm::path::path_ids_to;
use crate::data_structures::MarkingTable;
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from the labeled source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source_label: &str) -> Result<MarkingTable<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, table: &MarkingTable<W>, target: VertexId) -> Result<Vec<VertexId>> {
        path_ids_to(table, target)
    }
}
