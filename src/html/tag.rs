// ============================================================================
// HTML helpers — escaping and tag building
// ============================================================================

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build an HTML tag around already-rendered content.
///
/// Attribute values are escaped; `content` is markup and passes through
/// untouched. Attributes keep their given order.
pub fn tag(name: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len() + 64);
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}
