//! Named builders for common tags.
//!
//! Each function is `h` with the tag filled in:
//!
//! ```rust
//! use ink_h::create_string;
//! use ink_h::tags::{li, ul};
//!
//! let list = ul([li(["one"]), li(["two"])]);
//! assert_eq!(create_string(&list), "<ul><li>one</li><li>two</li></ul>");
//! ```

use crate::node::{h, HArgs, HNode};

macro_rules! named_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Build a `<", $tag, ">` node")]
            pub fn $name(args: impl Into<HArgs>) -> HNode {
                h($tag, args)
            }
        )*
    };
}

named_tags! {
    a => "a",
    article => "article",
    aside => "aside",
    blockquote => "blockquote",
    br => "br",
    button => "button",
    code => "code",
    div => "div",
    em => "em",
    footer => "footer",
    form => "form",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    header => "header",
    hr => "hr",
    img => "img",
    input => "input",
    label => "label",
    li => "li",
    nav => "nav",
    ol => "ol",
    option => "option",
    p => "p",
    path => "path",
    pre => "pre",
    section => "section",
    select => "select",
    span => "span",
    strong => "strong",
    svg => "svg",
    textarea => "textarea",
    ul => "ul",
}
