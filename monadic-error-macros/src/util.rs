use syn::spanned::Spanned;
use syn::{parse_quote, Error, Path, Result, ReturnType, Signature, Type};

/// Gets the default path of the runtime crate
pub fn default_crate_path() -> Path {
    parse_quote!(::monadic_error)
}

/// Gets the return type of the given signature, `()` if it has none.
pub fn get_return_type(sig: &Signature) -> Result<Type> {
    match &sig.output {
        ReturnType::Default => Ok(parse_quote!(())),
        ReturnType::Type(_, kind) => {
            if let Type::ImplTrait(_) = &**kind {
                return Err(Error::new(
                    kind.span(),
                    "`impl Trait` return types cannot be wrapped",
                ));
            }

            Ok((**kind).clone())
        }
    }
}

/// Checks whether the given signature can be wrapped
pub fn check_signature(sig: &Signature) -> Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new(asyncness.span(), "Function must not be async"));
    }

    if let Some(constness) = &sig.constness {
        return Err(Error::new(constness.span(), "Function must not be const"));
    }

    Ok(())
}
