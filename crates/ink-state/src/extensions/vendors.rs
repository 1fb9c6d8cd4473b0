//! Option-driven extensions.

use crate::options::Options;
use crate::plugin::Plugin;
use crate::vendor::{CompletionSource, Extension, Vendor};

/// Build the extensions selected by `options`, in registration order
pub fn build_vendors(options: &Options) -> Vec<Extension> {
    let mut vendors = Vec::new();

    if options.interface.autocomplete {
        vendors.push(autocomplete(completion_sources(&options.plugins)));
    }

    if options.interface.images {
        vendors.push(Extension::Vendor(Vendor::Images));
    }

    let keybindings = &options.keybindings;
    if keybindings.tab || keybindings.shift_tab {
        vendors.push(Extension::Vendor(Vendor::IndentWithTab {
            tab: keybindings.tab,
            shift_tab: keybindings.shift_tab,
        }));
    }

    if !options.placeholder.is_empty() {
        vendors.push(Extension::Vendor(Vendor::Placeholder(
            options.placeholder.clone(),
        )));
    }

    vendors.push(Extension::Vendor(Vendor::ReadOnly(options.interface.readonly)));
    vendors.push(Extension::Vendor(Vendor::Spellcheck(options.interface.spellcheck)));

    if options.vim {
        vendors.push(Extension::Vendor(Vendor::Vim));
    }

    vendors
}

pub fn autocomplete(sources: Vec<CompletionSource>) -> Extension {
    Extension::Vendor(Vendor::Autocomplete(sources))
}

fn completion_sources(plugins: &[Plugin]) -> Vec<CompletionSource> {
    plugins
        .iter()
        .filter_map(|plugin| match plugin {
            Plugin::Completion(source) => Some(source.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Interface, Keybindings};
    use crate::vendor::Grammar;

    fn names(extensions: &[Extension]) -> Vec<&str> {
        extensions.iter().map(Extension::name).collect()
    }

    #[test]
    fn test_default_options() {
        let vendors = build_vendors(&Options::default());
        assert_eq!(names(&vendors), vec!["indent_with_tab", "read_only", "spellcheck"]);
        assert_eq!(vendors[1], Extension::Vendor(Vendor::ReadOnly(false)));
        assert_eq!(vendors[2], Extension::Vendor(Vendor::Spellcheck(true)));
    }

    #[test]
    fn test_all_options() {
        let options = Options {
            interface: Interface {
                autocomplete: true,
                images: true,
                readonly: true,
                spellcheck: false,
            },
            keybindings: Keybindings {
                tab: false,
                shift_tab: true,
            },
            placeholder: "Start writing...".to_string(),
            vim: true,
            ..Default::default()
        };
        let vendors = build_vendors(&options);
        assert_eq!(
            names(&vendors),
            vec![
                "autocomplete",
                "images",
                "indent_with_tab",
                "placeholder",
                "read_only",
                "spellcheck",
                "vim",
            ]
        );
        assert_eq!(
            vendors[2],
            Extension::Vendor(Vendor::IndentWithTab {
                tab: false,
                shift_tab: true
            })
        );
    }

    #[test]
    fn test_tab_indentation_off() {
        let options = Options {
            keybindings: Keybindings {
                tab: false,
                shift_tab: false,
            },
            ..Default::default()
        };
        assert!(!names(&build_vendors(&options)).contains(&"indent_with_tab"));
    }

    #[test]
    fn test_autocomplete_collects_completion_plugins() {
        let options = Options {
            interface: Interface {
                autocomplete: true,
                ..Default::default()
            },
            plugins: vec![
                Plugin::Completion(CompletionSource::new("tags", ["#todo"])),
                Plugin::Grammar(Grammar::new("mermaid")),
                Plugin::Completion(CompletionSource::new("people", ["@ada"])),
            ],
            ..Default::default()
        };
        let vendors = build_vendors(&options);
        let Extension::Vendor(Vendor::Autocomplete(sources)) = &vendors[0] else {
            panic!("expected autocomplete first");
        };
        let source_names: Vec<_> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(source_names, vec!["tags", "people"]);
    }
}
