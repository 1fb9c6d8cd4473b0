//! Virtual node tree
//!
//! This module defines the lightweight node descriptors produced by [`h`] and
//! consumed by the serializers. Nodes are built fresh for each render and never
//! mutated after construction.

use std::fmt;

use indexmap::IndexMap;

use crate::utilities::is_void_tag;

/// Attributes of a node, kept in insertion order
pub type Props = IndexMap<String, AttrValue>;

/// An attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Number(value) => fmt_number(*value, f),
            AttrValue::Str(value) => f.write_str(value),
        }
    }
}

/// Numbers print the way a browser stringifies them: `1` rather than `1.0`,
/// `Infinity` rather than `inf`, and exponent form (`1e-7`, `1e+21`) outside
/// `[1e-6, 1e21)`.
fn fmt_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        // covers -0
        f.write_str("0")
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{}", value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

macro_rules! number_attr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Number(value as f64)
                }
            }
        )*
    };
}

number_attr!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// A child position in the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Nested node
    Node(HNode),
    /// Render nothing at this position
    Skip,
    /// Raw text, emitted verbatim
    Text(String),
}

impl Child {
    pub fn is_skip(&self) -> bool {
        matches!(self, Child::Skip)
    }
}

impl From<HNode> for Child {
    fn from(node: HNode) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Arguments accepted by [`h`] after the tag name.
///
/// Converts from `()`, [`Props`], a sequence of children, or a
/// `(Props, children)` pair, so a call site passes only what it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HArgs {
    pub options: Props,
    pub children: Vec<Child>,
}

impl From<()> for HArgs {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Props> for HArgs {
    fn from(options: Props) -> Self {
        Self {
            options,
            children: Vec::new(),
        }
    }
}

impl<C: Into<Child>> From<Vec<C>> for HArgs {
    fn from(children: Vec<C>) -> Self {
        Self {
            options: Props::new(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Child>, const N: usize> From<[C; N]> for HArgs {
    fn from(children: [C; N]) -> Self {
        Self {
            options: Props::new(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Child>> From<(Props, Vec<C>)> for HArgs {
    fn from((options, children): (Props, Vec<C>)) -> Self {
        Self {
            options,
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Child>, const N: usize> From<(Props, [C; N])> for HArgs {
    fn from((options, children): (Props, [C; N])) -> Self {
        Self {
            options,
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// A node descriptor: tag, attributes and children.
///
/// Void tags (see [`crate::VOID_TAGS`]) never carry children; anything passed
/// for them is dropped when the node is built.
#[derive(Debug, Clone, PartialEq)]
pub struct HNode {
    tag: String,
    options: Props,
    children: Vec<Child>,
}

impl HNode {
    /// Build a node. Same as [`h`].
    pub fn new(tag: impl Into<String>, args: impl Into<HArgs>) -> Self {
        let tag = tag.into();
        let HArgs { options, children } = args.into();
        let children = if is_void_tag(&tag) { Vec::new() } else { children };

        Self {
            tag,
            options,
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn options(&self) -> &Props {
        &self.options
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        is_void_tag(&self.tag)
    }

    /// Set an attribute, replacing any previous value in place
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Append a child. Ignored for void tags.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        if !self.is_void() {
            self.children.push(child.into());
        }
        self
    }
}

/// Build a node descriptor.
///
/// ```rust
/// use ink_h::{create_string, h, props, Child};
///
/// let node = h("p", (props! { "class" => "lead" }, [Child::from("Hi "), h("b", ["there"]).into()]));
/// assert_eq!(create_string(&node), r#"<p class="lead">Hi <b>there</b></p>"#);
/// ```
pub fn h(tag: impl Into<String>, args: impl Into<HArgs>) -> HNode {
    HNode::new(tag, args)
}

/// Build a node only when `condition` holds.
///
/// Returns [`Child::Skip`] otherwise, without calling `producer`.
pub fn h_if<F>(condition: bool, producer: F) -> Child
where
    F: FnOnce() -> HNode,
{
    if !condition {
        return Child::Skip;
    }

    Child::Node(producer())
}

/// Build [`Props`] from `key => value` pairs, preserving their order.
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(
            props.insert(::std::string::String::from($key), $crate::AttrValue::from($value));
        )+
        props
    }};
}
