//! Loader for the plain-text adjacency format.
//!
//! ```text
//! # vertices, in order
//! A B C D
//! # one adjacency line per vertex: <weight> <label> pairs
//! 1 B 4 C
//! 2 C 5 D
//! 1 D
//!
//! ```
//!
//! Lines starting with `#` are comments. The header is the first non-blank,
//! non-comment line. After it, every non-comment line is the adjacency list
//! of the next vertex in header order; an empty line means no outgoing edges.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use log::debug;
use num_traits::{PrimInt, Unsigned};

use crate::graph::directed::LabeledGraph;
use crate::graph::traits::{Graph, MutableGraph, VertexId};
use crate::{Error, Result};

/// Reads and parses a graph file
pub fn load_file<W, P>(path: P) -> Result<LabeledGraph<W>>
where
    W: PrimInt + Unsigned + Debug,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    debug!("Loading graph from {}", path.display());
    parse_graph(&input)
}

/// Parses a graph from its textual adjacency description
pub fn parse_graph<W>(input: &str) -> Result<LabeledGraph<W>>
where
    W: PrimInt + Unsigned + Debug,
{
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim_start().starts_with('#'));

    let (header_line, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or_else(|| Error::Parse {
            line: input.lines().count().max(1),
            message: "missing vertex header".to_string(),
        })?;

    let labels: Vec<&str> = header.split_whitespace().collect();
    let mut graph = LabeledGraph::with_capacity(labels.len());
    for label in &labels {
        graph.add_vertex(label)?;
    }

    let mut last_line = header_line;
    for (index, label) in labels.iter().enumerate() {
        let (line_no, line) = lines.next().ok_or_else(|| Error::Parse {
            line: last_line + 1,
            message: format!("too few lines: missing adjacency list for vertex {label}"),
        })?;
        last_line = line_no;

        parse_adjacency(&mut graph, VertexId(index), line_no, line)?;
    }

    debug!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn parse_adjacency<W>(
    graph: &mut LabeledGraph<W>,
    from: VertexId,
    line_no: usize,
    line: &str,
) -> Result<()>
where
    W: PrimInt + Unsigned + Debug,
{
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::Parse {
            line: line_no,
            message: format!("expected `<weight> <label>` pairs, found {} tokens", tokens.len()),
        });
    }

    for pair in tokens.chunks(2) {
        let weight = parse_weight::<W>(pair[0], line_no)?;
        let target = pair[1];
        if let Err(e) = graph.add_edge(from, target, weight) {
            debug!("Line {line_no}: edge to {target} rejected: {e}");
            return Err(e);
        }
    }

    Ok(())
}

fn parse_weight<W>(token: &str, line_no: usize) -> Result<W>
where
    W: PrimInt + Unsigned + Debug,
{
    if token.starts_with('-') {
        return Err(Error::NegativeWeight(token.to_string()));
    }

    W::from_str_radix(token, 10).map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid weight `{token}`"),
    })
}
