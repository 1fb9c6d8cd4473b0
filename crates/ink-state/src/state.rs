//! Editor state assembly.

use tracing::{debug, trace};

use crate::extensions::{builtin_extensions, VendorBuilder};
use crate::options::{Options, Selection};
use crate::plugin::Plugin;
use crate::vendor::{EditorSelection, EditorState, SelectionRange, StateConfig};
use crate::Result;

/// Assemble the initial editor state for `options`.
///
/// Extensions are registered as: everything `vendors` builds for `options`,
/// then the built-ins (blockquote, code, history, ink, keymaps, line wrapping,
/// lists, markdown with the grammar plugins, theme), then the default plugins.
/// Later registrations take precedence, so default plugins can override the
/// built-ins. Completion plugins are left to the vendor builder.
pub fn make_state<V>(options: &Options, vendors: &V) -> Result<EditorState>
where
    V: VendorBuilder + ?Sized,
{
    let mut plugin_extensions = Vec::new();
    let mut grammars = Vec::new();

    for plugin in &options.plugins {
        match plugin {
            Plugin::Default(extension) => plugin_extensions.push(extension.clone()),
            Plugin::Grammar(grammar) => grammars.push(grammar.clone()),
            other => trace!(kind = other.kind().as_str(), "plugin not used for state assembly"),
        }
    }

    let mut extensions = vendors.build(options);

    debug!(
        vendors = extensions.len(),
        plugins = plugin_extensions.len(),
        grammars = grammars.len(),
        selections = options.selections.len(),
        "assembling editor state"
    );

    extensions.extend(builtin_extensions(grammars));
    extensions.extend(plugin_extensions);

    EditorState::create(StateConfig {
        doc: options.doc.clone(),
        selection: to_vendor_selection(&options.selections)?,
        extensions,
    })
}

fn to_vendor_selection(selections: &[Selection]) -> Result<Option<EditorSelection>> {
    if selections.is_empty() {
        return Ok(None);
    }

    let ranges = selections
        .iter()
        .map(|s| SelectionRange::range(s.anchor, s.head))
        .collect();

    EditorSelection::create(ranges, 0).map(Some)
}
