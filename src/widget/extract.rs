use crate::{
    dom::{Selector, parse_fragment},
    widget::error::WidgetError,
};

// ============================================================================
// Template extraction — pull one item subtree out of the rendered body
// ============================================================================

/// Extract the clone template from the rendered body markup.
///
/// The body is parsed leniently, and the first node matching `item_selector`
/// is serialized standalone (tag, attributes, full subtree). A body with no
/// matching node is a defect in the caller-supplied markup and fails hard.
pub fn extract_template(body: &str, item_selector: &str) -> Result<String, WidgetError> {
    let selector = parse_selector(item_selector)?;
    let fragment = parse_fragment(body);
    let node = fragment
        .select_first(&selector)
        .ok_or_else(|| WidgetError::TemplateNotFound {
            selector: item_selector.to_string(),
        })?;
    Ok(node.to_html().trim().to_string())
}

/// Remove every item node from the body markup.
///
/// Applied when `min == 0` and the bound record is new: the visible body
/// starts empty while the separately captured template stays available for
/// client-side cloning.
pub fn remove_items(body: &str, item_selector: &str) -> Result<String, WidgetError> {
    let selector = parse_selector(item_selector)?;
    let mut fragment = parse_fragment(body);
    fragment.remove_all(&selector);
    Ok(fragment.to_html())
}

fn parse_selector(item_selector: &str) -> Result<Selector, WidgetError> {
    Selector::parse(item_selector).ok_or_else(|| {
        WidgetError::invalid(
            "widget_item",
            &format!("'{}' is not a parsable selector", item_selector),
        )
    })
}
