//! Extension sets composed into an editor state.

mod builtin;
mod vendors;

pub use builtin::{
    blockquote, builtin_extensions, code, history, ink, keymaps, line_wrapping, lists, markdown,
    theme,
};
pub use vendors::{autocomplete, build_vendors};

use crate::options::Options;
use crate::vendor::Extension;

/// Produces the build-time extensions that precede the built-ins.
///
/// Implemented for any `Fn(&Options) -> Vec<Extension>`, so [`build_vendors`]
/// or a closure can be passed directly.
pub trait VendorBuilder {
    fn build(&self, options: &Options) -> Vec<Extension>;
}

impl<F> VendorBuilder for F
where
    F: Fn(&Options) -> Vec<Extension>,
{
    fn build(&self, options: &Options) -> Vec<Extension> {
        self(options)
    }
}

/// The stock vendor set: [`build_vendors`] as a nameable [`VendorBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVendors;

impl VendorBuilder for DefaultVendors {
    fn build(&self, options: &Options) -> Vec<Extension> {
        build_vendors(options)
    }
}
