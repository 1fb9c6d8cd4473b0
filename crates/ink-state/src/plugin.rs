//! Plugins.

use crate::vendor::{CompletionSource, Extension, Grammar};

/// A plugin contributed by the embedding application
#[derive(Debug, Clone, PartialEq)]
pub enum Plugin {
    /// Completion candidates for the autocomplete popup
    Completion(CompletionSource),
    /// Extension appended after the built-in extensions
    Default(Extension),
    /// Grammar handed to the markdown parser
    Grammar(Grammar),
}

/// Plugin tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Completion,
    Default,
    Grammar,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginKind::Completion => "completion",
            PluginKind::Default => "default",
            PluginKind::Grammar => "grammar",
        }
    }
}

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Completion(_) => PluginKind::Completion,
            Plugin::Default(_) => PluginKind::Default,
            Plugin::Grammar(_) => PluginKind::Grammar,
        }
    }
}

impl From<Extension> for Plugin {
    fn from(extension: Extension) -> Self {
        Plugin::Default(extension)
    }
}

impl From<Grammar> for Plugin {
    fn from(grammar: Grammar) -> Self {
        Plugin::Grammar(grammar)
    }
}

impl From<CompletionSource> for Plugin {
    fn from(source: CompletionSource) -> Self {
        Plugin::Completion(source)
    }
}
