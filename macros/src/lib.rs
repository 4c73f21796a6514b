//! Procedural macros for the annotated marker registry
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Annotated)]` | struct | Register type markers and `#[mark_field]` fields |
//! | `#[annotated_methods]` | inherent impl | Register `#[mark]` / `#[mark_repeat]` methods |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Annotated)]
//! #[mark]
//! struct Annotations {
//!     #[mark_field]
//!     foo: i32,
//! }
//!
//! #[annotated_methods]
//! impl Annotations {
//!     #[mark]
//!     pub fn func(&self) { println!("hi from func()"); }
//!
//!     #[mark_repeat(times = 3)]
//!     pub fn func2(&self) { println!("func2() says hi"); }
//! }
//! ```
//!
//! Misplaced, duplicate or malformed markers are compile errors.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro implementing `annotated::Annotated`.
///
/// Records the markers on the struct itself and every field carrying
/// `#[mark_field]`, in declaration order. Fields may have any visibility;
/// marked fields must be `'static + Debug`.
///
/// # Usage
/// ```ignore
/// #[derive(Annotated)]
/// #[mark]
/// struct Job {
///     #[mark_field]
///     retries: i32,
///     name: String,   // not registered
/// }
/// ```
#[proc_macro_derive(Annotated, attributes(mark, mark_repeat, mark_field))]
pub fn derive_annotated(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_annotated(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Attribute macro implementing `annotated::AnnotatedMethods`.
///
/// Place it on the subject's inherent `impl` block. Methods carrying
/// `#[mark]` or `#[mark_repeat(times = N)]` are registered in declaration
/// order; the marker attributes are removed from the emitted impl.
///
/// Marked methods take `&self` or no receiver and no other arguments, and
/// return `()` or a `Result`.
///
/// Use it on exactly one inherent `impl` block per subject: it implements
/// `AnnotatedMethods` for the type, so a second annotated block fails with
/// "conflicting implementations of trait `AnnotatedMethods`". Keep every
/// marked method in that block; other impl blocks may hold unmarked ones.
///
/// # Usage
/// ```ignore
/// #[annotated_methods]
/// impl Job {
///     #[mark]
///     pub fn start(&self) {}
///
///     #[mark_repeat(times = 2)]
///     pub fn tick(&self) -> Result<(), std::io::Error> { Ok(()) }
/// }
/// ```
#[proc_macro_attribute]
pub fn annotated_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "`#[annotated_methods]` takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let item_impl = parse_macro_input!(item as syn::ItemImpl);
    user::expand_annotated_methods(item_impl)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
