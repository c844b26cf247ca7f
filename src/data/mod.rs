mod graph;
mod load;
mod model;

pub use graph::{Edge, EdgeKind, ScholarGraph};
pub use load::load_graph;
pub use model::Scholar;
