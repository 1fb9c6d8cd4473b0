//! DOM output.
//!
//! Serializes a node, parses the markup as an HTML5 fragment in `<template>`
//! context (what `template.innerHTML = ..` does) and returns the first
//! resulting node as an owned [`Node`] tree. Template context keeps table parts
//! such as `tr`, `td` and `col` that a `<body>` context would drop.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, QualName};
use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::dom::Node;
use crate::node::HNode;
use crate::serialize::create_string;
use crate::{HError, Result};

/// Serialize a node and parse it into a DOM tree.
///
/// # Example
///
/// ```rust
/// use ink_h::{create_element, h, props};
///
/// let element = create_element(&h("a", (props! { "href" => "/" }, ["Home"]))).unwrap();
/// assert_eq!(element.tag_name(), "a");
/// assert_eq!(element.attr("href"), Some("/"));
/// assert_eq!(element.text_content(), "Home");
/// ```
pub fn create_element(node: &HNode) -> Result<Node> {
    let html = create_string(node);
    let fragment = parse_template_fragment(&html);

    tracing::trace!(tag = node.tag(), len = html.len(), "parsed node markup as fragment");

    convert_children(fragment.root_element())
        .into_iter()
        .next()
        .ok_or(HError::EmptyFragment(html))
}

fn parse_template_fragment(html: &str) -> Html {
    let parser = driver::parse_fragment(
        Html::new_fragment(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("template")),
        Vec::new(),
    );
    parser.one(html)
}

/// Convert a scraper element into our Node structure
fn convert_element(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element(element.value().name(), attrs);
    node.children = convert_children(element);
    node
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    element
        .children()
        .filter_map(|child| match child.value() {
            ScraperNode::Text(text) => Some(Node::text(&text.text)),
            ScraperNode::Comment(comment) => Some(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => ElementRef::wrap(child).map(convert_element),
            _ => None,
        })
        .collect()
}
