use sha1::{Digest, Sha1};

use crate::widget::{config::PluginOptions, error::WidgetError};

/// Prefix for the generated JavaScript variable name.
pub const WIDGET_NAME: &str = "dynamicForm";

/// Number of checksum hex chars kept in the variable name.
const HASH_LEN: usize = 8;

/// Canonical JSON encoding of the plugin options. Struct field order is
/// stable, so equal options always encode to the same string.
pub fn encode_options(options: &PluginOptions) -> Result<String, WidgetError> {
    serde_json::to_string(options).map_err(|e| WidgetError::Encode {
        context: "plugin options".to_string(),
        source: e,
    })
}

/// Derive the hashed variable name for an encoded options string.
///
/// The name doubles as the JavaScript global holding the options and as the
/// per-container deduplication key: a short checksum suffix on a fixed
/// prefix, safe as a JS identifier.
pub fn hash_var_name(encoded: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(encoded.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{}_{}", WIDGET_NAME, &digest[..HASH_LEN])
}
