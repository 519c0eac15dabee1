use crate::dom::node::Node;

// ============================================================================
// CSS-style selectors — the subset widget selectors actually use
// ============================================================================

/// A parsed selector list.
///
/// Supported grammar: compound simple selectors (`tag`, `#id`, `.class`,
/// `[attr]`, `[attr=value]`, combinations like `div.item`), the descendant
/// combinator (whitespace), and comma-separated lists. That covers every
/// selector shape the widget's container/body/item properties take.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    alternatives: Vec<DescendantChain>,
}

/// One comma-separated alternative: compounds joined by descendant combinators,
/// rightmost last.
#[derive(Debug, Clone, PartialEq)]
struct DescendantChain {
    compounds: Vec<Compound>,
}

/// One compound selector: all parts must match a single element.
#[derive(Debug, Clone, PartialEq)]
struct Compound {
    parts: Vec<SimplePart>,
}

#[derive(Debug, Clone, PartialEq)]
enum SimplePart {
    Tag(String),
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

impl Selector {
    /// Parse a selector string. Empty or unparsable input yields `None`.
    pub fn parse(input: &str) -> Option<Selector> {
        let mut alternatives = Vec::new();
        for alt in input.split(',') {
            let alt = alt.trim();
            if alt.is_empty() {
                return None;
            }
            let mut compounds = Vec::new();
            for token in alt.split_whitespace() {
                compounds.push(parse_compound(token)?);
            }
            if compounds.is_empty() {
                return None;
            }
            alternatives.push(DescendantChain { compounds });
        }
        if alternatives.is_empty() {
            None
        } else {
            Some(Selector { alternatives })
        }
    }

    /// Whether `node` matches, given its ancestor chain (outermost first).
    pub fn matches(&self, node: &Node, ancestors: &[&Node]) -> bool {
        self.alternatives
            .iter()
            .any(|chain| chain.matches(node, ancestors))
    }
}

impl DescendantChain {
    fn matches(&self, node: &Node, ancestors: &[&Node]) -> bool {
        let (last, rest) = match self.compounds.split_last() {
            Some(split) => split,
            None => return false,
        };
        if !last.matches(node) {
            return false;
        }
        // Each remaining compound must match some ancestor, in order.
        let mut ancestor_iter = ancestors.iter();
        for compound in rest {
            if !ancestor_iter.any(|candidate| compound.matches(candidate)) {
                return false;
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        let (tag, attributes) = match node {
            Node::Element {
                tag, attributes, ..
            } => (tag, attributes),
            _ => return false,
        };
        self.parts.iter().all(|part| match part {
            SimplePart::Tag(name) => tag.eq_ignore_ascii_case(name),
            SimplePart::Id(id) => attr_value(attributes, "id") == Some(id.as_str()),
            SimplePart::Class(class) => attr_value(attributes, "class")
                .map(|classes| classes.split_whitespace().any(|c| c == class))
                .unwrap_or(false),
            SimplePart::Attr { name, value } => match attr_value(attributes, name) {
                Some(actual) => value.as_deref().is_none_or(|expected| actual == expected),
                None => false,
            },
        })
    }
}

fn attr_value<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn parse_compound(token: &str) -> Option<Compound> {
    let mut parts = Vec::new();
    let mut chars = token.chars().peekable();

    // Leading bare tag name, if any.
    let mut tag = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' || c == '#' || c == '[' {
            break;
        }
        tag.push(c);
        chars.next();
    }
    if !tag.is_empty() {
        if tag == "*" {
            // Universal selector: matches any element, no part needed.
        } else if tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            parts.push(SimplePart::Tag(tag));
        } else {
            return None;
        }
    }

    while let Some(marker) = chars.next() {
        match marker {
            '.' | '#' => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '.' || c == '#' || c == '[' {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                if name.is_empty() {
                    return None;
                }
                parts.push(if marker == '.' {
                    SimplePart::Class(name)
                } else {
                    SimplePart::Id(name)
                });
            }
            '[' => {
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed || body.is_empty() {
                    return None;
                }
                let (name, value) = match body.split_once('=') {
                    Some((name, value)) => {
                        (name.to_string(), Some(value.trim_matches(['"', '\'']).to_string()))
                    }
                    None => (body, None),
                };
                if name.is_empty() {
                    return None;
                }
                parts.push(SimplePart::Attr { name, value });
            }
            _ => return None,
        }
    }

    if parts.is_empty() && token != "*" {
        return None;
    }
    Some(Compound { parts })
}
