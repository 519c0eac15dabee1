use std::fmt;

#[derive(Debug)]
pub enum WidgetError {
    /// A widget property failed validation
    InvalidConfig { property: String, reason: String },

    /// The rendered body contained no node matching the item selector
    TemplateNotFound { selector: String },

    /// Plugin options could not be JSON-encoded
    Encode { context: String, source: serde_json::Error },
}

impl WidgetError {
    pub(crate) fn invalid(property: &str, reason: &str) -> Self {
        WidgetError::InvalidConfig {
            property: property.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::InvalidConfig { property, reason } => {
                write!(f, "Invalid configuration for property '{}': {}", property, reason)
            }
            WidgetError::TemplateNotFound { selector } => {
                write!(
                    f,
                    "No node matching item selector '{}' in rendered body; \
                     cannot extract a clone template",
                    selector
                )
            }
            WidgetError::Encode { context, source } => {
                write!(f, "JSON encode error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}
