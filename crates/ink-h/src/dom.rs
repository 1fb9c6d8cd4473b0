//! Owned DOM tree returned by [`create_element`](crate::create_element).
//!
//! This is a parsed, browser-normalized view of serialized markup: tag names are
//! lowercase, attributes are de-duplicated by the parser, and misplaced
//! elements have been moved or dropped according to HTML5 parsing rules.

use crate::utilities::{escape_attr, escape_text, is_void_html_tag};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
}

/// A parsed DOM node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text` or `#comment` otherwise
    pub node_name: String,

    /// Content of text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node
    pub fn element(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: attrs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text | NodeType::Comment => self.node_value.clone().unwrap_or_default(),
            NodeType::Element => self
                .children()
                .filter(|child| child.node_type != NodeType::Comment)
                .map(|child| child.text_content())
                .collect(),
        }
    }

    /// Serialize like a browser's `outerHTML`
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => escape_text(self.node_value.as_deref().unwrap_or_default()),
            NodeType::Comment => {
                format!("<!--{}-->", self.node_value.as_deref().unwrap_or_default())
            }
            NodeType::Element => {
                let tag = self.tag_name();
                let mut html = format!("<{}", tag);
                for (name, value) in &self.attributes {
                    html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
                }
                html.push('>');

                if !is_void_html_tag(tag) {
                    html.push_str(&self.inner_html());
                    html.push_str(&format!("</{}>", tag));
                }
                html
            }
        }
    }

    /// Serialize the children like a browser's `innerHTML`
    pub fn inner_html(&self) -> String {
        self.children().map(|child| child.outer_html()).collect()
    }
}
