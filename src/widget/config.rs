use serde::{Deserialize, Serialize};

// ============================================================================
// Plugin options — the client-side configuration object
// ============================================================================

/// Where the client script inserts a cloned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Bottom,
    Top,
}

/// One field's resolved DOM id/name pair. The `{}` placeholder in both is
/// replaced per clone by the client script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub id: String,
    pub name: String,
}

/// The configuration object exposed to the browser under the hashed variable
/// name.
///
/// Struct field order fixes JSON key order, which makes the encoding
/// canonical: hashing the same options twice always yields the same
/// variable name. Key names are the wire format the companion client script
/// reads. `template` is set exactly once, after the body buffer is captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub widget_container: String,
    pub widget_body: String,
    pub widget_item: String,
    pub limit: u32,
    pub insert_button: Option<String>,
    pub delete_button: Option<String>,
    pub insert_position: InsertPosition,
    pub form_id: String,
    pub min: u32,
    pub fields: Vec<FieldBinding>,
    pub template: String,
}
