//! XML utilities for navigating DWML trees.

mod utils;

pub use utils::{
    child_text, children_named, descendants_named, element_children, first_child, node_text,
    parse_float,
};
