use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;

mod options;
mod util;
mod wrap;

use wrap::Wrapper;

/// Wraps a function so it returns a `Maybe` of its original return type, the function body
/// runs inside `try_option` so a panic is turned into `Nothing`.
///
/// Usage:
///
/// - Without arguments, as `#[option]`.
/// - Providing the path of the runtime crate, as `#[option(crate = "path::to::monadic_error")]`,
///   useful when the dependency has been renamed.
///
/// `async` functions, `const` functions and functions returning `impl Trait` are not supported.
#[proc_macro_attribute]
pub fn option(attrs: TokenStream, input: TokenStream) -> TokenStream {
    extract(wrap::wrap(Wrapper::Option, attrs.into(), input.into()))
}

/// Wraps a function so it returns a `Caught` attempt of its original return type, the function
/// body runs inside `try_attempt` so a panic is kept as the failure.
///
/// Accepts the same arguments as [`option`](macro@option).
#[proc_macro_attribute]
pub fn attempt(attrs: TokenStream, input: TokenStream) -> TokenStream {
    extract(wrap::wrap(Wrapper::Attempt, attrs.into(), input.into()))
}

/// Extracts the given result, throwing a compile error if an error is given.
fn extract(res: syn::Result<TokenStream2>) -> TokenStream {
    match res {
        Ok(s) => s,
        Err(why) => why.to_compile_error(),
    }
    .into()
}
