use std::collections::BTreeMap;

use crate::{trace::logger::TraceLogger, view::assets::AssetBundle};

// ============================================================================
// View — the per-page script registration sink
// ============================================================================

/// Where a registered script snippet is injected into the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Inside `<head>`, before any DOM is available.
    Head,
    /// After the DOM is ready.
    Ready,
    /// After the full page (including assets) has loaded.
    Load,
}

/// Collects everything one page render pass registers: script snippets per
/// injection point, asset bundles, and the widget registration map.
///
/// One `View` spans exactly one render pass. Creating a fresh `View` per
/// request is what keeps widget registrations from leaking across requests.
pub struct View {
    head_js: Vec<String>,
    ready_js: Vec<String>,
    load_js: Vec<String>,
    assets: Vec<AssetBundle>,

    /// Widget container -> hashed variable name. First registration wins.
    registered_widgets: BTreeMap<String, String>,

    /// Picks `.js` vs `.min.js` asset variants.
    pub debug: bool,

    trace: Option<TraceLogger>,
}

impl View {
    pub fn new() -> Self {
        View {
            head_js: Vec::new(),
            ready_js: Vec::new(),
            load_js: Vec::new(),
            assets: Vec::new(),
            registered_widgets: BTreeMap::new(),
            debug: false,
            trace: None,
        }
    }

    /// A view that appends a JSONL trace event per widget render.
    pub fn with_trace(path: &str) -> Self {
        let mut view = Self::new();
        view.trace = Some(TraceLogger::new(path));
        view
    }

    /// Register a script snippet at an injection point. Snippets keep
    /// registration order within each position.
    pub fn register_js(&mut self, position: Position, code: String) {
        match position {
            Position::Head => self.head_js.push(code),
            Position::Ready => self.ready_js.push(code),
            Position::Load => self.load_js.push(code),
        }
    }

    /// Register an asset bundle, deduplicating by bundle name.
    pub fn register_asset(&mut self, bundle: AssetBundle) {
        if !self.assets.iter().any(|a| a.name == bundle.name) {
            self.assets.push(bundle);
        }
    }

    /// Record a widget under its container key.
    ///
    /// Returns `true` when this is the first registration for the container;
    /// `false` when the container already holds a (possibly different)
    /// variable name, in which case the earlier registration stands.
    pub fn register_widget(&mut self, container: &str, hash_var: &str) -> bool {
        if self.registered_widgets.contains_key(container) {
            return false;
        }
        self.registered_widgets
            .insert(container.to_string(), hash_var.to_string());
        true
    }

    /// The variable name registered for a container, if any.
    pub fn hash_var_for(&self, container: &str) -> Option<&str> {
        self.registered_widgets.get(container).map(String::as_str)
    }

    pub fn registered_assets(&self) -> &[AssetBundle] {
        &self.assets
    }

    pub fn trace_logger(&self) -> Option<&TraceLogger> {
        self.trace.as_ref()
    }

    /// Markup for the document head: asset script tags followed by the
    /// head-position snippets in one script block.
    pub fn head_html(&self) -> String {
        let mut out = String::new();
        for bundle in &self.assets {
            for file in bundle.script_files(self.debug) {
                out.push_str(&format!("<script src=\"{}\"></script>\n", file));
            }
        }
        if !self.head_js.is_empty() {
            out.push_str("<script>\n");
            for snippet in &self.head_js {
                out.push_str(snippet);
            }
            out.push_str("</script>\n");
        }
        out
    }

    /// DOM-ready snippets wrapped in a jQuery ready handler.
    pub fn ready_html(&self) -> String {
        wrap_snippets(&self.ready_js, "jQuery(function () {", "});")
    }

    /// Post-load snippets wrapped in a window load handler.
    pub fn load_html(&self) -> String {
        wrap_snippets(
            &self.load_js,
            "jQuery(window).on(\"load\", function () {",
            "});",
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_snippets(snippets: &[String], opener: &str, closer: &str) -> String {
    if snippets.is_empty() {
        return String::new();
    }
    let mut out = String::from("<script>\n");
    out.push_str(opener);
    out.push('\n');
    for snippet in snippets {
        out.push_str(snippet);
    }
    out.push_str(closer);
    out.push_str("\n</script>\n");
    out
}
