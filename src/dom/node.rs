use crate::dom::selector::Selector;

// ============================================================================
// DOM tree — parsed HTML fragment nodes
// ============================================================================

/// Elements whose start tag never takes children or an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

/// One node of a parsed HTML fragment.
///
/// Text and attribute values are stored verbatim as they appeared in the
/// input; entities are neither decoded on parse nor re-encoded on
/// serialization, so a parse/serialize round trip preserves the author's
/// escaping.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    Comment(String),
}

impl Node {
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Attribute lookup on an element node; `None` for other node kinds.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Serialize this node (tag, attributes, full subtree) to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&value.replace('"', "&quot;"));
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// A parsed fragment: an ordered list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    /// All elements matching `selector`, in document order.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<&'a Node> {
        let mut found = Vec::new();
        let mut ancestors: Vec<&Node> = Vec::new();
        for node in &self.nodes {
            collect_matches(node, selector, &mut ancestors, &mut found);
        }
        found
    }

    /// The first element matching `selector`, if any.
    pub fn select_first<'a>(&'a self, selector: &Selector) -> Option<&'a Node> {
        self.select_all(selector).into_iter().next()
    }

    /// Remove every element matching `selector`, at any depth.
    pub fn remove_all(&mut self, selector: &Selector) {
        let mut ancestors: Vec<Node> = Vec::new();
        remove_matches(&mut self.nodes, selector, &mut ancestors);
    }

    /// Serialize the whole fragment back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

fn collect_matches<'a>(
    node: &'a Node,
    selector: &Selector,
    ancestors: &mut Vec<&'a Node>,
    found: &mut Vec<&'a Node>,
) {
    if let Node::Element { children, .. } = node {
        if selector.matches(node, ancestors) {
            found.push(node);
        }
        ancestors.push(node);
        for child in children {
            collect_matches(child, selector, ancestors, found);
        }
        ancestors.pop();
    }
}

fn remove_matches(nodes: &mut Vec<Node>, selector: &Selector, ancestors: &mut Vec<Node>) {
    {
        let ancestor_refs: Vec<&Node> = ancestors.iter().collect();
        nodes.retain(|node| !(node.is_element() && selector.matches(node, &ancestor_refs)));
    }
    for node in nodes.iter_mut() {
        if let Node::Element {
            tag,
            attributes,
            children,
        } = node
        {
            // Childless clone stands in as the ancestor while recursing.
            let marker = Node::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: Vec::new(),
            };
            let mut inner = std::mem::take(children);
            ancestors.push(marker);
            remove_matches(&mut inner, selector, ancestors);
            ancestors.pop();
            *children = inner;
        }
    }
}
