use std::path::PathBuf;

use log::info;

use crate::algorithm::dijkstra::{Dijkstra, Selection};
use crate::graph::{load_file, LabeledGraph};
use crate::report::{render_graph, render_shortest_paths, GraphReport, RunReport, ShortestPathReport};
use crate::Result;

/// Output rendering of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for one load-compute-report invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub source: String,
    pub format: OutputFormat,
    pub selection: Selection,
    pub show_graph: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("nodes.txt"),
            source: "A".to_string(),
            format: OutputFormat::Text,
            selection: Selection::LinearScan,
            show_graph: true,
        }
    }
}

/// Loads the configured graph file, runs the engine and renders the report
pub fn run(config: &RunConfig) -> Result<String> {
    let graph = load_file::<u64, _>(&config.input)?;
    execute(config, &graph)
}

/// Runs the engine over an already loaded graph and renders the report.
/// No output is produced unless the whole run succeeds.
pub fn execute(config: &RunConfig, graph: &LabeledGraph<u64>) -> Result<String> {
    let table = Dijkstra::with_selection(config.selection).compute(graph, &config.source)?;
    info!(
        "{} of {} vertices reachable from {}",
        table.reachable_count(),
        table.len(),
        config.source
    );

    match config.format {
        OutputFormat::Text => {
            let mut out = String::new();
            if config.show_graph {
                out.push_str(&render_graph(graph)?);
                out.push('\n');
            }
            out.push_str(&render_shortest_paths(&table)?);
            Ok(out)
        }
        OutputFormat::Json => {
            let report = RunReport {
                graph: config
                    .show_graph
                    .then(|| GraphReport::from_graph(graph))
                    .transpose()?,
                shortest_paths: ShortestPathReport::from_table(&table)?,
            };
            report.to_json_pretty()
        }
    }
}
