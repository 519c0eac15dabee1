pub mod tag;

pub use tag::{escape_html, tag};
