pub mod traits;
pub mod directed;
pub mod generators;
pub mod loader;

pub use traits::{Graph, MutableGraph, VertexId};
pub use directed::{Edge, LabeledGraph, Vertex};
pub use loader::{load_file, parse_graph};
