//! Editor options.

use crate::plugin::Plugin;

/// A selection in the initial document, as char offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }
}

/// Interface toggles
#[derive(Debug, Clone)]
pub struct Interface {
    /// Show completions from completion plugins
    pub autocomplete: bool,

    /// Render image previews
    pub images: bool,

    /// Disallow edits
    pub readonly: bool,

    /// Enable browser spellcheck
    pub spellcheck: bool,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            autocomplete: false,
            images: false,
            readonly: false,
            spellcheck: true,
        }
    }
}

/// Keyboard bindings
#[derive(Debug, Clone)]
pub struct Keybindings {
    /// Tab indents
    pub tab: bool,

    /// Shift-Tab dedents
    pub shift_tab: bool,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            tab: true,
            shift_tab: true,
        }
    }
}

/// Resolved options for building an editor state
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Initial document text
    pub doc: String,

    /// Initial selections; the editor default is used when empty
    pub selections: Vec<Selection>,

    /// Plugins in registration order
    pub plugins: Vec<Plugin>,

    pub interface: Interface,

    pub keybindings: Keybindings,

    /// Text shown while the document is empty
    pub placeholder: String,

    /// Vim keybindings
    pub vim: bool,
}
