//! Reporting of a loaded graph and of a finished run, as text or as serde models.

pub mod models;
pub mod text;

pub use models::{EdgeReport, GraphReport, RunReport, ShortestPathReport, VertexEdgesReport, VertexReport};
pub use text::{render_graph, render_shortest_paths};
