pub use convert::{chain_to_node, node_to_chain, optional_chain_to_node};
pub use node::{nodes_equal, Node, NodeKind};

mod convert;
mod node;
mod ops;
