use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::data_structures::MarkingTable;
use crate::graph::VertexId;
use crate::{Error, Result};

/// Unpacks the shortest path from the source to `target` by walking
/// predecessor links back and reversing. Fails with `Unreachable` when the
/// target was never reached.
pub fn path_ids_to<W>(table: &MarkingTable<W>, target: VertexId) -> Result<Vec<VertexId>>
where
    W: PrimInt + Unsigned + Debug,
{
    let marking = table.get_by_id(target)?;
    if marking.distance.is_none() {
        return Err(Error::Unreachable(marking.label.clone()));
    }

    let mut path = vec![target];
    let mut next = marking.predecessor;

    while let Some(v) = next {
        if path.len() >= table.len() {
            return Err(Error::BrokenPath(marking.label.clone()));
        }
        path.push(v);
        next = table.get_by_id(v)?.predecessor;
    }

    if path.last() != Some(&table.source()) {
        return Err(Error::BrokenPath(marking.label.clone()));
    }
    path.reverse();
    Ok(path)
}

/// Labels along the shortest path from the source to `target`, source first
pub fn path_to<W>(table: &MarkingTable<W>, target: VertexId) -> Result<Vec<String>>
where
    W: PrimInt + Unsigned + Debug,
{
    path_ids_to(table, target)?
        .into_iter()
        .map(|v| table.get_by_id(v).map(|m| m.label.clone()))
        .collect()
}

/// Same as [`path_to`], resolving the target by label first
pub fn path_to_label<W>(table: &MarkingTable<W>, label: &str) -> Result<Vec<String>>
where
    W: PrimInt + Unsigned + Debug,
{
    path_to(table, table.id_of(label)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LabeledGraph;

    fn table() -> MarkingTable<u32> {
        let graph: LabeledGraph<u32> =
            LabeledGraph::from_edges::<&str, &str>(&["A", "B", "C", "D"], &[]).unwrap();
        MarkingTable::initialize(&graph, "A").unwrap()
    }

    #[test]
    fn predecessor_cycle_is_an_error() {
        let mut table = table();
        table.relax(VertexId(1), VertexId(2), 1).unwrap();
        table.relax(VertexId(2), VertexId(1), 1).unwrap();

        assert!(matches!(path_ids_to(&table, VertexId(1)), Err(Error::BrokenPath(label)) if label == "B"));
    }

    #[test]
    fn chain_ending_away_from_the_source_is_an_error() {
        let mut table = table();
        table.relax(VertexId(3), VertexId(2), 4).unwrap();

        assert!(matches!(path_ids_to(&table, VertexId(3)), Err(Error::BrokenPath(label)) if label == "D"));
    }

    #[test]
    fn longest_simple_chain_is_accepted() {
        let mut table = table();
        table.relax(VertexId(1), VertexId(0), 1).unwrap();
        table.relax(VertexId(2), VertexId(1), 2).unwrap();
        table.relax(VertexId(3), VertexId(2), 3).unwrap();

        let path = path_ids_to(&table, VertexId(3)).unwrap();
        assert_eq!(path, vec![VertexId(0), VertexId(1), VertexId(2), VertexId(3)]);
    }
}
