//! `#[annotated_methods]`: marked methods of an inherent impl block.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned, Error, FnArg, ImplItem, ImplItemFn, ItemImpl, Signature, Type};

use crate::common::{collect_markers, strip_markers, visibility_tokens, Kind, Target};

/// Expand `#[annotated_methods]` on an inherent impl block.
///
/// The impl block is re-emitted without marker attributes, followed by an
/// `AnnotatedMethods` impl whose table holds one invocation shim per marked
/// method, in declaration order.
pub fn expand_annotated_methods(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(Error::new_spanned(
            path,
            "`#[annotated_methods]` must be placed on an inherent impl block",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "annotated subjects cannot be generic",
        ));
    }

    let self_ty = (*item.self_ty).clone();
    let mut shims = Vec::new();
    let mut entries = Vec::new();

    for impl_item in &mut item.items {
        let method = match impl_item {
            ImplItem::Fn(method) => method,
            ImplItem::Const(constant) => {
                reject_markers(&constant.attrs)?;
                continue;
            }
            ImplItem::Type(alias) => {
                reject_markers(&alias.attrs)?;
                continue;
            }
            _ => continue,
        };

        let markers = collect_markers(&method.attrs, Target::Method)?;
        strip_markers(&mut method.attrs);
        if markers.is_empty() {
            continue;
        }

        let name = method.sig.ident.unraw().to_string();
        let shim = format_ident!("__annotated_invoke_{}", method.sig.ident);
        let call = invocation(&self_ty, method)?;
        let visibility = visibility_tokens(&method.vis);

        shims.push(quote! {
            fn #shim(subject: &#self_ty) -> ::core::result::Result<(), ::annotated::MemberError> {
                ::annotated::IntoOutcome::into_outcome(#call)
            }
        });
        entries.push(quote! {
            ::annotated::MethodEntry::new(#name, #visibility, &[#(#markers),*], #shim)
        });
    }

    Ok(quote! {
        #item

        impl ::annotated::AnnotatedMethods for #self_ty {
            const METHODS: &'static [::annotated::MethodEntry<Self>] = {
                #(#shims)*
                &[#(#entries),*]
            };
        }
    })
}

/// The call expression for a marked method, after checking its signature.
fn invocation(self_ty: &Type, method: &ImplItemFn) -> syn::Result<TokenStream2> {
    let sig = &method.sig;
    check_signature(sig)?;

    let ident = &sig.ident;
    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        None => Ok(quote! { { let _ = subject; <#self_ty>::#ident() } }),
        Some(FnArg::Receiver(receiver)) => {
            let by_shared_ref = receiver.reference.is_some()
                && receiver.mutability.is_none()
                && receiver.colon_token.is_none();
            if !by_shared_ref {
                return Err(Error::new_spanned(
                    receiver,
                    "marked methods must take `&self` or no receiver",
                ));
            }
            if let Some(extra) = inputs.next() {
                return Err(Error::new_spanned(
                    extra,
                    "marked methods cannot take arguments besides `&self`",
                ));
            }
            Ok(quote! { <#self_ty>::#ident(subject) })
        }
        Some(arg) => Err(Error::new_spanned(
            arg,
            "marked methods cannot take arguments besides `&self`",
        )),
    }
}

fn check_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(asyncness, "marked methods cannot be `async`"));
    }
    if let Some(unsafety) = &sig.unsafety {
        return Err(Error::new_spanned(unsafety, "marked methods cannot be `unsafe`"));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(&sig.generics, "marked methods cannot be generic"));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(Error::new(variadic.span(), "marked methods cannot be variadic"));
    }
    Ok(())
}

fn reject_markers(attrs: &[syn::Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| Kind::of(attr).is_some()) {
        Some(attr) => Err(Error::new_spanned(attr, "markers can only be placed on methods here")),
        None => Ok(()),
    }
}
