//! Configuration options for HTML serialization

/// Escaping applied to attribute values and text children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Emit everything verbatim. Callers must sanitize untrusted input.
    #[default]
    None,
    /// Escape `& < >` in text and `& " < >` in attribute values
    Html,
}

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Escaping mode
    pub escape: Escape,
}
