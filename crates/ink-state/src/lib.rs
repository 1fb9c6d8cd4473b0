//! ink-state - initial editor state assembly
//!
//! Builds the state an ink editor opens with: the document, the initial
//! selection, and the ordered list of extensions composed from option-driven
//! vendor extensions, the editor's built-ins and caller plugins.
//!
//! # Architecture
//!
//! ```text
//!             ┌── VendorBuilder ──▶ vendor extensions ──┐
//! Options ────┼── built-ins (+ grammar plugins) ────────┼──▶ EditorState
//!             └── default plugins ──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use ink_state::{build_vendors, make_state, Extension, Grammar, Options, Plugin, Selection};
//!
//! let options = Options {
//!     doc: "# Notes".to_string(),
//!     selections: vec![Selection::new(2, 7)],
//!     plugins: vec![
//!         Plugin::Grammar(Grammar::new("mermaid")),
//!         Plugin::Default(Extension::custom("word-count")),
//!     ],
//!     ..Default::default()
//! };
//!
//! let state = make_state(&options, &build_vendors).unwrap();
//! assert_eq!(state.extension_names().last(), Some(&"word-count"));
//! assert_eq!(state.markdown().unwrap().extensions, vec![Grammar::new("mermaid")]);
//! ```

pub mod extensions;
mod options;
mod plugin;
mod state;
pub mod vendor;

pub use extensions::{build_vendors, DefaultVendors, VendorBuilder};
pub use options::{Interface, Keybindings, Options, Selection};
pub use plugin::{Plugin, PluginKind};
pub use state::make_state;
pub use vendor::{
    CompletionSource, EditorSelection, EditorState, Extension, Grammar, SelectionRange,
};

/// Error type for editor state construction
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Selection points outside of document: position {pos}, length {len}")]
    SelectionOutOfRange { pos: usize, len: usize },

    #[error("A selection needs at least one range")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, StateError>;
