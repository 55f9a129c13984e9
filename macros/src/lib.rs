use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Error, Ident, LitStr};

/// Turns an error code literal into a module level item named after the code.
///
/// Every error constant registers its code through this macro, so two errors
/// sharing a code end up defining the same item twice and the crate fails to
/// compile.
#[proc_macro]
pub fn error_code_to_ident(input: TokenStream) -> TokenStream {
    let code = parse_macro_input!(input as LitStr);
    let value = code.value();

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Error::new(code.span(), "error codes must be non-empty and alphanumeric")
            .into_compile_error()
            .into();
    }

    let ident = Ident::new(
        &format!("__ERROR_CODE_{}", value.to_ascii_uppercase()),
        Span::call_site(),
    );

    quote! {
        #[allow(dead_code, non_upper_case_globals)]
        const #ident: () = ();
    }
    .into()
}
