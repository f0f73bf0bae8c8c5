use darling::{export::NestedMeta, FromMeta};
use proc_macro2::TokenStream as TokenStream2;
use syn::{Path, Result};

use crate::util;

#[derive(Default, FromMeta)]
/// The arguments accepted by the wrapping macros
pub struct WrapOptions {
    /// The path of the runtime crate, `::monadic_error` if not set
    #[darling(rename = "crate", default)]
    pub krate: Option<Path>,
}

impl WrapOptions {
    pub fn parse(attrs: TokenStream2) -> Result<Self> {
        if attrs.is_empty() {
            return Ok(Self::default());
        }

        let meta = NestedMeta::parse_meta_list(attrs)?;
        Ok(Self::from_list(meta.as_slice())?)
    }

    /// Gets the path of the runtime crate
    pub fn crate_path(&self) -> Path {
        self.krate.clone().unwrap_or_else(util::default_crate_path)
    }
}
