//! HTML string serialization
//!
//! Converts node descriptors into HTML text.
//!
//! **No escaping is performed by default.** Attribute values and text children
//! are written exactly as given, so markup inside them becomes markup in the
//! output. Sanitize untrusted input first, or opt in to
//! [`Escape::Html`](crate::Escape::Html) through [`create_string_with`].

use crate::node::{Child, HNode};
use crate::options::{Escape, SerializeOptions};
use crate::utilities::{escape_attr, escape_text, is_void_tag};

/// Serialize a node to an HTML string, verbatim
pub fn create_string(node: &HNode) -> String {
    create_string_with(node, &SerializeOptions::default())
}

/// Serialize a node to an HTML string with explicit options
pub fn create_string_with(node: &HNode, options: &SerializeOptions) -> String {
    let mut output = String::with_capacity(256);
    serialize_node(node, options, &mut output);
    output
}

fn serialize_node(node: &HNode, options: &SerializeOptions, out: &mut String) {
    let tag = node.tag();

    out.push('<');
    out.push_str(tag);

    for (key, value) in node.options() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        let value = value.to_string();
        match options.escape {
            Escape::None => out.push_str(&value),
            Escape::Html => out.push_str(&escape_attr(&value)),
        }
        out.push('"');
    }

    if is_void_tag(tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');

    for child in node.children() {
        match child {
            Child::Text(text) => match options.escape {
                Escape::None => out.push_str(text),
                Escape::Html => out.push_str(&escape_text(text)),
            },
            Child::Skip => {}
            Child::Node(node) => serialize_node(node, options, out),
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{h, h_if};
    use crate::{props, Props};

    #[test]
    fn test_void_element() {
        let node = h("br", (props! { "class" => "x" }, ["ignored"]));
        assert_eq!(create_string(&node), r#"<br class="x" />"#);
    }

    #[test]
    fn test_void_element_without_attributes() {
        assert_eq!(create_string(&h("hr", ())), "<hr />");
    }

    #[test]
    fn test_nested_children() {
        let node = h(
            "div",
            (Props::new(), [Child::from("a"), h("span", ["b"]).into()]),
        );
        assert_eq!(create_string(&node), "<div>a<span>b</span></div>");
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(create_string(&h("li", ())), "<li></li>");
    }

    #[test]
    fn test_skip_marker_omitted() {
        let node = h(
            "ul",
            [
                h_if(false, || h("li", ())),
                h_if(true, || h("li", ())),
            ],
        );
        assert_eq!(create_string(&node), "<ul><li></li></ul>");
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let node = h(
            "input",
            props! {
                "type" => "checkbox",
                "checked" => true,
                "tabindex" => -1,
                "data-ratio" => 0.25,
            },
        );
        assert_eq!(
            create_string(&node),
            r#"<input type="checkbox" checked="true" tabindex="-1" data-ratio="0.25" />"#
        );
    }

    #[test]
    fn test_attributes_verbatim_on_non_void() {
        let node = h("a", props! { "z" => "last?", "a" => "first&" });
        assert_eq!(create_string(&node), r#"<a z="last?" a="first&"></a>"#);
    }

    #[test]
    fn test_svg_path_self_closes() {
        let node = h(
            "svg",
            (
                props! { "viewBox" => "0 0 24 24" },
                [h("path", props! { "d" => "M0 0h24v24H0z" })],
            ),
        );
        assert_eq!(
            create_string(&node),
            r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z" /></svg>"#
        );
    }

    #[test]
    fn test_no_escaping_by_default() {
        let node = h(
            "p",
            (props! { "title" => r#"a "quote""# }, ["<b>&</b>"]),
        );
        assert_eq!(
            create_string(&node),
            r#"<p title="a "quote""><b>&</b></p>"#
        );
    }

    #[test]
    fn test_opt_in_html_escaping() {
        let node = h(
            "p",
            (props! { "title" => r#"a "quote""# }, ["<b>&</b>"]),
        );
        let options = SerializeOptions {
            escape: Escape::Html,
        };
        assert_eq!(
            create_string_with(&node, &options),
            r#"<p title="a &quot;quote&quot;">&lt;b&gt;&amp;&lt;/b&gt;</p>"#
        );
    }

    #[test]
    fn test_default_options_match_create_string() {
        let node = h("p", ["<i>raw</i>"]);
        assert_eq!(
            create_string_with(&node, &SerializeOptions::default()),
            create_string(&node)
        );
    }

    #[test]
    fn test_deep_tree() {
        let node = h(
            "nav",
            [h(
                "ul",
                [
                    h("li", [h("a", (props! { "href" => "/" }, ["Home"]))]),
                    h("li", [h("a", (props! { "href" => "/about" }, ["About"]))]),
                ],
            )],
        );
        assert_eq!(
            create_string(&node),
            r#"<nav><ul><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul></nav>"#
        );
    }
}
