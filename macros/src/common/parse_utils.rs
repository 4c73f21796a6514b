//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, LitInt, Token,
};

// =============================================================================
// Key-Value Arguments: `key = 3`
// =============================================================================

/// A single `key = <integer>` argument.
pub struct IntArg {
    pub key: Ident,
    pub value: LitInt,
}

impl Parse for IntArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if !input.peek(Ident) {
            return Err(input.error("expected `key = <integer>`"));
        }
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        if input.peek(Token![-]) {
            return Err(input.error("expected a non-negative integer literal"));
        }
        let value: LitInt = input.parse()?;
        Ok(IntArg { key, value })
    }
}

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
