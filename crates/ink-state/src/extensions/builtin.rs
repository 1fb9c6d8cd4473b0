//! Built-in extensions.

use crate::vendor::{
    languages, Builtin, Extension, Grammar, MarkdownConfig, MarkdownLanguage,
};

/// Create the built-in extensions, in registration order
pub fn builtin_extensions(grammars: Vec<Grammar>) -> Vec<Extension> {
    vec![
        blockquote(),
        code(),
        history(),
        ink(),
        keymaps(),
        line_wrapping(),
        lists(),
        markdown(grammars),
        theme(),
    ]
}

pub fn blockquote() -> Extension {
    Extension::Builtin(Builtin::Blockquote)
}

pub fn code() -> Extension {
    Extension::Builtin(Builtin::Code)
}

pub fn history() -> Extension {
    Extension::Builtin(Builtin::History)
}

pub fn ink() -> Extension {
    Extension::Builtin(Builtin::Ink)
}

pub fn keymaps() -> Extension {
    Extension::Builtin(Builtin::Keymaps)
}

pub fn line_wrapping() -> Extension {
    Extension::Builtin(Builtin::LineWrapping)
}

pub fn lists() -> Extension {
    Extension::Builtin(Builtin::Lists)
}

/// GFM markdown with the built-in code languages and the given grammars
pub fn markdown(grammars: Vec<Grammar>) -> Extension {
    Extension::Markdown(MarkdownConfig {
        base: MarkdownLanguage::Gfm,
        code_languages: languages(),
        extensions: grammars,
    })
}

pub fn theme() -> Extension {
    Extension::Builtin(Builtin::Theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let names: Vec<_> = builtin_extensions(Vec::new())
            .iter()
            .map(|ext| ext.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "blockquote",
                "code",
                "history",
                "ink",
                "keymaps",
                "line_wrapping",
                "lists",
                "markdown",
                "theme",
            ]
        );
    }

    #[test]
    fn test_markdown_receives_grammars_in_order() {
        let ext = markdown(vec![Grammar::new("mermaid"), Grammar::new("math")]);
        let Extension::Markdown(config) = ext else {
            panic!("expected markdown extension");
        };
        assert_eq!(config.base, MarkdownLanguage::Gfm);
        assert_eq!(config.extensions, vec![Grammar::new("mermaid"), Grammar::new("math")]);
        assert!(!config.code_languages.is_empty());
    }
}
