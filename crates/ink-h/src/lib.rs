//! ink-h - hyperscript-style HTML builder
//!
//! Build a lightweight node tree with [`h`], then serialize it to an HTML
//! string with [`create_string`] or, with the `dom` feature, to a parsed DOM
//! tree with [`create_element`].
//!
//! # Architecture
//!
//! ```text
//!  h() / tags::*  ──▶ ┌───────┐ ── create_string ──▶ HTML String
//!  h_if()         ──▶ │ HNode │
//!                     └───────┘ ── create_element ──▶ dom::Node
//! ```
//!
//! # Escaping
//!
//! Nothing is escaped unless asked for. Text children and attribute values are
//! written verbatim, so untrusted input must be sanitized by the caller or
//! serialized with [`Escape::Html`] via [`create_string_with`].
//!
//! # Example
//!
//! ```rust
//! use ink_h::{create_string, h, h_if, props};
//!
//! let show_badge = false;
//! let node = h("ul", (props! { "class" => "items" }, [
//!     h_if(true, || h("li", ["first"])),
//!     h_if(show_badge, || h("li", ["badge"])),
//! ]));
//!
//! assert_eq!(create_string(&node), r#"<ul class="items"><li>first</li></ul>"#);
//! ```

#[cfg(feature = "dom")]
pub mod dom;
#[cfg(feature = "dom")]
mod html;
mod node;
mod options;
mod serialize;
pub mod tags;
mod utilities;

#[cfg(feature = "dom")]
pub use html::create_element;
pub use node::{h, h_if, AttrValue, Child, HArgs, HNode, Props};
pub use options::{Escape, SerializeOptions};
pub use serialize::{create_string, create_string_with};
pub use utilities::{is_void_tag, VOID_HTML_TAGS, VOID_SVG_TAGS, VOID_TAGS};

/// Error type for ink-h operations
#[derive(Debug, thiserror::Error)]
pub enum HError {
    #[error("Markup produced no nodes when parsed: {0}")]
    EmptyFragment(String),
}

pub type Result<T> = std::result::Result<T, HError>;
