use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse2, ItemFn, Path, Result};

use crate::options::WrapOptions;
use crate::util;

/// The container a wrapped function returns
#[derive(Clone, Copy)]
pub enum Wrapper {
    Option,
    Attempt,
}

impl Wrapper {
    /// Gets the return type of the wrapped function
    fn container(self, krate: &Path, output: &syn::Type) -> TokenStream2 {
        match self {
            Self::Option => quote!(#krate::maybe::Maybe<#output>),
            Self::Attempt => quote!(#krate::attempt::Caught<#output>),
        }
    }

    /// Gets the function used to run the original body
    fn runner(self, krate: &Path) -> TokenStream2 {
        match self {
            Self::Option => quote!(#krate::utils::try_option),
            Self::Attempt => quote!(#krate::utils::try_attempt),
        }
    }
}

/// The implementation of both wrapping macros, the function keeps its name and arguments, but
/// its output is wrapped in the given container and its body is moved into a closure ran by
/// the matching `try_*` function.
pub fn wrap(wrapper: Wrapper, attrs: TokenStream2, input: TokenStream2) -> Result<TokenStream2> {
    let options = WrapOptions::parse(attrs)?;
    let fun = parse2::<ItemFn>(input)?;

    let ItemFn {
        attrs,
        vis,
        mut sig,
        block,
    } = fun;

    util::check_signature(&sig)?;

    let output = util::get_return_type(&sig)?;
    let krate = options.crate_path();
    let container = wrapper.container(&krate, &output);
    let runner = wrapper.runner(&krate);

    sig.output = parse2(quote!(-> #container))?;

    /*
    The output type is given explicitly so the closure gets the original return type, this
    keeps `return` and `?` inside the body working as they did before.
    */
    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #runner::<#output, _>(move || #block)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(wrapper: Wrapper, attrs: TokenStream2, input: TokenStream2) -> String {
        wrap(wrapper, attrs, input).unwrap().to_string()
    }

    #[test]
    fn wraps_in_maybe() {
        let out = expand(
            Wrapper::Option,
            TokenStream2::new(),
            quote!(pub fn parse(input: &str) -> i32 { input.parse().unwrap() }),
        );

        let expected = quote! {
            pub fn parse(input: &str) -> ::monadic_error::maybe::Maybe<i32> {
                ::monadic_error::utils::try_option::<i32, _>(move || { input.parse().unwrap() })
            }
        };
        assert_eq!(out, expected.to_string());
    }

    #[test]
    fn wraps_in_caught_with_unit_output() {
        let out = expand(
            Wrapper::Attempt,
            quote!(crate = "errors"),
            quote!(#[inline] fn touch() {}),
        );

        let expected = quote! {
            #[inline]
            fn touch() -> errors::attempt::Caught<()> {
                errors::utils::try_attempt::<(), _>(move || {})
            }
        };
        assert_eq!(out, expected.to_string());
    }

    #[test]
    fn rejects_async() {
        let err = wrap(Wrapper::Attempt, TokenStream2::new(), quote!(async fn run() {}));
        assert_eq!(err.unwrap_err().to_string(), "Function must not be async");
    }

    #[test]
    fn rejects_impl_trait() {
        let err = wrap(
            Wrapper::Option,
            TokenStream2::new(),
            quote!(fn items() -> impl Iterator<Item = u8> { 0..1 }),
        );
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_functions() {
        assert!(wrap(Wrapper::Option, TokenStream2::new(), quote!(struct Unit;)).is_err());
    }
}
