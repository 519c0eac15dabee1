use crate::dom::node::{Fragment, Node, RAW_TEXT_ELEMENTS, VOID_ELEMENTS};

// ============================================================================
// Lenient HTML fragment parser
// ============================================================================
//
// Mirrors browser parsing leniency rather than enforcing well-formedness:
// - stray end tags are dropped;
// - an end tag for an open ancestor auto-closes everything inside it;
// - void elements never take children;
// - raw-text elements (script/style/textarea) swallow markup until their
//   matching end tag;
// - attributes may be double-quoted, single-quoted, unquoted, or bare;
// - comments and doctype declarations are tolerated.
//
// Text and attribute values are kept verbatim (no entity decoding), so the
// serialized output of a parsed subtree reproduces the input markup.

/// Parse an HTML fragment into a node tree. Never fails: malformed input
/// degrades the way a browser would degrade it.
pub fn parse_fragment(input: &str) -> Fragment {
    let mut parser = Parser {
        input: input.as_bytes(),
        pos: 0,
    };
    let mut root = Vec::new();
    // Stack of open elements; (tag, attributes, children).
    let mut open: Vec<(String, Vec<(String, String)>, Vec<Node>)> = Vec::new();

    while let Some(token) = parser.next_token() {
        match token {
            Token::Text(text) => {
                push_node(&mut open, &mut root, Node::Text(text));
            }
            Token::Comment(text) => {
                push_node(&mut open, &mut root, Node::Comment(text));
            }
            Token::Doctype => {}
            Token::Start {
                tag,
                attributes,
                self_closing,
            } => {
                if self_closing || VOID_ELEMENTS.contains(&tag.as_str()) {
                    push_node(
                        &mut open,
                        &mut root,
                        Node::Element {
                            tag,
                            attributes,
                            children: Vec::new(),
                        },
                    );
                } else if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                    let text = parser.read_raw_text(&tag);
                    let mut children = Vec::new();
                    if !text.is_empty() {
                        children.push(Node::Text(text));
                    }
                    push_node(
                        &mut open,
                        &mut root,
                        Node::Element {
                            tag,
                            attributes,
                            children,
                        },
                    );
                } else {
                    open.push((tag, attributes, Vec::new()));
                }
            }
            Token::End { tag } => {
                // Stray end tag with no matching open element is dropped.
                if let Some(depth) = open.iter().rposition(|(open_tag, _, _)| *open_tag == tag) {
                    while open.len() > depth {
                        let (tag, attributes, children) = match open.pop() {
                            Some(frame) => frame,
                            None => break,
                        };
                        push_node(
                            &mut open,
                            &mut root,
                            Node::Element {
                                tag,
                                attributes,
                                children,
                            },
                        );
                    }
                }
            }
        }
    }

    // Unclosed elements close at end of input.
    while let Some((tag, attributes, children)) = open.pop() {
        push_node(
            &mut open,
            &mut root,
            Node::Element {
                tag,
                attributes,
                children,
            },
        );
    }

    Fragment { nodes: root }
}

fn push_node(
    open: &mut [(String, Vec<(String, String)>, Vec<Node>)],
    root: &mut Vec<Node>,
    node: Node,
) {
    match open.last_mut() {
        Some((_, _, children)) => children.push(node),
        None => root.push(node),
    }
}

enum Token {
    Text(String),
    Comment(String),
    Doctype,
    Start {
        tag: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    End {
        tag: String,
    },
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn next_token(&mut self) -> Option<Token> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.input[self.pos] != b'<' {
            let start = self.pos;
            while self.pos < self.input.len() && self.input[self.pos] != b'<' {
                self.pos += 1;
            }
            return Some(Token::Text(self.slice(start, self.pos)));
        }

        // A '<' that does not open a tag is literal text.
        if !self.looks_like_tag() {
            self.pos += 1;
            return Some(Token::Text("<".to_string()));
        }

        if self.starts_with("<!--") {
            return Some(self.read_comment());
        }
        if self.starts_with("<!") {
            // Doctype or other declaration: skip to '>'.
            while self.pos < self.input.len() && self.input[self.pos] != b'>' {
                self.pos += 1;
            }
            self.pos = (self.pos + 1).min(self.input.len());
            return Some(Token::Doctype);
        }

        if self.starts_with("</") {
            self.pos += 2;
            let tag = self.read_tag_name();
            while self.pos < self.input.len() && self.input[self.pos] != b'>' {
                self.pos += 1;
            }
            self.pos = (self.pos + 1).min(self.input.len());
            return Some(Token::End { tag });
        }

        self.pos += 1; // consume '<'
        let tag = self.read_tag_name();
        let (attributes, self_closing) = self.read_attributes();
        Some(Token::Start {
            tag,
            attributes,
            self_closing,
        })
    }

    /// Peek whether the '<' at `pos` begins a tag, end tag, comment, or
    /// declaration; anything else (e.g. "a < b") is text.
    fn looks_like_tag(&self) -> bool {
        match self.input.get(self.pos + 1) {
            Some(c) => c.is_ascii_alphabetic() || *c == b'/' || *c == b'!',
            None => false,
        }
    }

    fn read_comment(&mut self) -> Token {
        self.pos += 4; // "<!--"
        let start = self.pos;
        while self.pos < self.input.len() && !self.starts_with("-->") {
            self.pos += 1;
        }
        let text = self.slice(start, self.pos);
        self.pos = (self.pos + 3).min(self.input.len());
        Token::Comment(text)
    }

    fn read_tag_name(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.input.len() {
            let c = self.input[self.pos];
            if c.is_ascii_alphanumeric() || c == b'-' || c == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.slice(start, self.pos).to_ascii_lowercase()
    }

    fn read_attributes(&mut self) -> (Vec<(String, String)>, bool) {
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            match self.input[self.pos] {
                b'>' => {
                    self.pos += 1;
                    break;
                }
                b'/' => {
                    self.pos += 1;
                    if self.pos < self.input.len() && self.input[self.pos] == b'>' {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                }
                _ => {
                    let name = self.read_attr_name();
                    if name.is_empty() {
                        // Unparsable byte; skip it rather than loop forever.
                        self.pos += 1;
                        continue;
                    }
                    self.skip_whitespace();
                    let value = if self.pos < self.input.len() && self.input[self.pos] == b'=' {
                        self.pos += 1;
                        self.skip_whitespace();
                        self.read_attr_value()
                    } else {
                        String::new()
                    };
                    attributes.push((name, value));
                }
            }
        }

        (attributes, self_closing)
    }

    fn read_attr_name(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.input.len() {
            let c = self.input[self.pos];
            if c.is_ascii_whitespace() || c == b'=' || c == b'>' || c == b'/' {
                break;
            }
            self.pos += 1;
        }
        self.slice(start, self.pos).to_ascii_lowercase()
    }

    fn read_attr_value(&mut self) -> String {
        if self.pos >= self.input.len() {
            return String::new();
        }
        let quote = self.input[self.pos];
        if quote == b'"' || quote == b'\'' {
            self.pos += 1;
            let start = self.pos;
            while self.pos < self.input.len() && self.input[self.pos] != quote {
                self.pos += 1;
            }
            let value = self.slice(start, self.pos);
            self.pos = (self.pos + 1).min(self.input.len());
            value
        } else {
            let start = self.pos;
            while self.pos < self.input.len() {
                let c = self.input[self.pos];
                if c.is_ascii_whitespace() || c == b'>' {
                    break;
                }
                self.pos += 1;
            }
            self.slice(start, self.pos)
        }
    }

    /// Consume raw text up to `</tag`, leaving the end tag consumed.
    fn read_raw_text(&mut self, tag: &str) -> String {
        let close = format!("</{}", tag);
        let close = close.as_bytes();
        let start = self.pos;
        let mut end = self.input.len();
        let mut cursor = self.pos;
        while cursor + close.len() <= self.input.len() {
            if self.input[cursor..cursor + close.len()].eq_ignore_ascii_case(close) {
                end = cursor;
                break;
            }
            cursor += 1;
        }
        let text = self.slice(start, end);
        self.pos = end;
        // Consume the end tag itself, if present.
        if self.pos < self.input.len() {
            while self.pos < self.input.len() && self.input[self.pos] != b'>' {
                self.pos += 1;
            }
            self.pos = (self.pos + 1).min(self.input.len());
        }
        text
    }

    fn starts_with(&self, needle: &str) -> bool {
        self.input[self.pos..].starts_with(needle.as_bytes())
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }
}
