// ============================================================================
// Bindable model seam — form names and indexed input id/name resolution
// ============================================================================

/// A data model the widget can bind form fields against.
///
/// `form_name` scopes input names (`Guest[{}][email]`); `is_new_record`
/// drives the zero-min item stripping policy: a widget with `min == 0`
/// rendering a not-yet-persisted record starts with an empty body.
pub trait FormModel {
    /// The name grouping this model's inputs in submitted form data.
    fn form_name(&self) -> String;

    /// Whether the record has not been persisted yet.
    fn is_new_record(&self) -> bool;
}

/// Resolve the input `name` attribute for an attribute expression.
///
/// The expression may carry a tabular prefix such as `[{}]` ahead of the
/// attribute name; `{}` is a literal placeholder the client script replaces
/// with the clone index. `input_name(m, "[{}]email")` on form `Guest` gives
/// `Guest[{}][email]`.
pub fn input_name(model: &dyn FormModel, attribute: &str) -> String {
    let (prefix, attr) = split_attribute(attribute);
    format!("{}{}[{}]", model.form_name(), prefix, attr)
}

/// Resolve the input `id` attribute: the lowercased input name with bracket
/// runs collapsed to `-`. `input_id(m, "[{}]email")` on form `Guest` gives
/// `guest-{}-email`.
pub fn input_id(model: &dyn FormModel, attribute: &str) -> String {
    let name = input_name(model, attribute).to_lowercase();
    name.replace("[]", "")
        .replace("][", "-")
        .replace('[', "-")
        .replace(']', "")
        .replace([' ', '.'], "-")
}

/// Split `"[{}]email"` into the bracketed prefix and the bare attribute.
fn split_attribute(attribute: &str) -> (&str, &str) {
    match attribute.rfind(']') {
        Some(end) if attribute.starts_with('[') => {
            (&attribute[..=end], &attribute[end + 1..])
        }
        _ => ("", attribute),
    }
}
