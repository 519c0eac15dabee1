use serde::{Deserialize, Serialize};

/// One widget render, as recorded in the JSONL trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderEvent {
    /// Container key the widget rendered under.
    pub container: String,

    /// Hashed variable name the container markup references.
    pub hash_var: String,

    /// Whether this render registered the scripts, or reused an earlier
    /// registration for the same container.
    pub registered: bool,

    /// Byte length of the extracted item template.
    pub template_len: usize,
}
