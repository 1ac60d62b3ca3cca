mod arena;
mod node;
mod raw_bptree_map;

pub(crate) use arena::Handle;
pub(crate) use node::Node;
pub(crate) use raw_bptree_map::{Comparator, RawBPTreeMap};
