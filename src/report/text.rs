use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

use crate::algorithm::path::path_to;
use crate::data_structures::MarkingTable;
use crate::graph::{Graph, LabeledGraph};
use crate::{Error, Result};

const GRAPH_BANNER: &str = "-----------------GRAPH-----------------";
const PATHS_BANNER: &str = "-----------SHORTEST PATHS--------------";
const RULE: &str = "---------------------------------------";

/// Renders one line per vertex: `A: B(1), C(4)`
pub fn render_graph<W>(graph: &LabeledGraph<W>) -> Result<String>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    let mut lines = vec![GRAPH_BANNER.to_string()];

    for (_, vertex) in graph.vertices() {
        let edges = vertex
            .edges()
            .iter()
            .map(|e| -> Result<String> { Ok(format!("{}({})", graph.label(e.target)?, e.weight)) })
            .collect::<Result<Vec<_>>>()?;
        lines.push(format!("{}: {}", vertex.label(), edges.join(", ")));
    }

    lines.push(RULE.to_string());
    Ok(lines.join("\n") + "\n")
}

/// Renders the final marking of every vertex together with its path
pub fn render_shortest_paths<W>(table: &MarkingTable<W>) -> Result<String>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    let source = &table.get_by_id(table.source())?.label;
    let mut lines = vec![PATHS_BANNER.to_string(), format!("Starting vertex: {source}")];

    for (id, marking) in table.iter() {
        let distance = marking
            .distance
            .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        let path = match path_to(table, id) {
            Ok(path) => path.join(" -> "),
            Err(Error::Unreachable(_)) => "unreachable".to_string(),
            Err(e) => return Err(e),
        };

        lines.push(format!("Label: {}", marking.label));
        lines.push(format!("Distance: {distance}"));
        lines.push(format!("From: {}", table.predecessor_label(id)?.unwrap_or("-")));
        lines.push(format!("Is explored: {}", marking.explored));
        lines.push(format!("Path: {path}"));
        lines.push(String::new());
    }

    lines.push(RULE.to_string());
    Ok(lines.join("\n") + "\n")
}
