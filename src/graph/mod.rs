pub(crate) mod filter_graph;
pub(crate) mod node;
