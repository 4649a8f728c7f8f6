use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use env_logger::Env;

use dijkstra_table::runner::{self, OutputFormat, RunConfig};
use dijkstra_table::Selection;

/// Shortest paths from one vertex of a labeled graph file
#[derive(Parser, Debug)]
#[command(name = "dijkstra", version, about)]
struct Cli {
    /// Graph description file
    #[arg(default_value = "nodes.txt")]
    input: PathBuf,

    /// Label of the source vertex
    #[arg(short, long, default_value = "A")]
    source: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Strategy used to pick the next vertex to finalize
    #[arg(long, value_enum, default_value_t = SelectionArg::Linear)]
    selection: SelectionArg,

    /// Skip printing the loaded graph
    #[arg(long)]
    no_graph: bool,

    /// Log the run at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionArg {
    Linear,
    Heap,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            input: cli.input,
            source: cli.source,
            format: match cli.format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            },
            selection: match cli.selection {
                SelectionArg::Linear => Selection::LinearScan,
                SelectionArg::Heap => Selection::BinaryHeap,
            },
            show_graph: !cli.no_graph,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = RunConfig::from(cli);
    match runner::run(&config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(1);
        }
    }
}
