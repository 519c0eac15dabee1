pub mod node;
pub mod parser;
pub mod selector;

pub use node::{Fragment, Node};
pub use parser::parse_fragment;
pub use selector::Selector;
