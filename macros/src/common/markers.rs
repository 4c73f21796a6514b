//! Marker attributes: recognition, argument parsing and target checks.
//!
//! All marker misuse is reported here, at definition time:
//! - a marker on a target outside its capability set
//! - a duplicate marker of one kind on one member
//! - `#[mark_repeat]` without a valid `times`
//! - arguments on `#[mark]` / `#[mark_field]`

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{parse::ParseStream, Attribute, Error, Meta};

use super::{parse_comma_separated, IntArg};

const REPEAT_USAGE: &str = "`#[mark_repeat]` requires `times`, e.g. `#[mark_repeat(times = 3)]`";

/// Where a marker attribute was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Type,
    Method,
    Field,
}

impl Target {
    fn describe(self) -> &'static str {
        match self {
            Target::Type => "a type",
            Target::Method => "a method",
            Target::Field => "a field",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    TypeOrMethod,
    Repeat,
    Field,
}

impl Kind {
    /// Recognize a marker attribute by its name.
    pub fn of(attr: &Attribute) -> Option<Kind> {
        let ident = attr.path().get_ident()?;
        match ident.to_string().as_str() {
            "mark" => Some(Kind::TypeOrMethod),
            "mark_repeat" => Some(Kind::Repeat),
            "mark_field" => Some(Kind::Field),
            _ => None,
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            Kind::TypeOrMethod => "mark",
            Kind::Repeat => "mark_repeat",
            Kind::Field => "mark_field",
        }
    }

    fn allowed_on(self, target: Target) -> bool {
        match self {
            Kind::TypeOrMethod => matches!(target, Target::Type | Target::Method),
            Kind::Repeat => target == Target::Method,
            Kind::Field => target == Target::Field,
        }
    }

    fn targets(self) -> &'static str {
        match self {
            Kind::TypeOrMethod => "types and methods",
            Kind::Repeat => "methods",
            Kind::Field => "fields",
        }
    }
}

/// A parsed marker, mirroring `annotated::Marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    TypeOrMethod,
    Repeat { times: u32 },
    Field,
}

impl Marker {
    pub fn kind(self) -> Kind {
        match self {
            Marker::TypeOrMethod => Kind::TypeOrMethod,
            Marker::Repeat { .. } => Kind::Repeat,
            Marker::Field => Kind::Field,
        }
    }
}

impl ToTokens for Marker {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        tokens.extend(match self {
            Marker::TypeOrMethod => quote! { ::annotated::Marker::TypeOrMethod },
            Marker::Repeat { times } => quote! { ::annotated::Marker::Repeat { times: #times } },
            Marker::Field => quote! { ::annotated::Marker::Field },
        });
    }
}

/// Collect the markers in `attrs`, in order, validating each against `target`.
pub fn collect_markers(attrs: &[Attribute], target: Target) -> syn::Result<Vec<Marker>> {
    let mut found: Vec<Marker> = Vec::new();
    for attr in attrs {
        let Some(kind) = Kind::of(attr) else { continue };
        if !kind.allowed_on(target) {
            return Err(Error::new_spanned(
                attr,
                format!(
                    "`#[{}]` cannot be placed on {}; it applies to {}",
                    kind.attribute(),
                    target.describe(),
                    kind.targets()
                ),
            ));
        }
        if found.iter().any(|m| m.kind() == kind) {
            return Err(Error::new_spanned(
                attr,
                format!("duplicate `#[{}]` marker", kind.attribute()),
            ));
        }
        found.push(parse_marker(attr, kind)?);
    }
    Ok(found)
}

/// Remove marker attributes that no derive will consume.
pub fn strip_markers(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| Kind::of(attr).is_none());
}

/// `::annotated::Visibility` for a declared visibility.
pub fn visibility_tokens(vis: &syn::Visibility) -> TokenStream2 {
    match vis {
        syn::Visibility::Public(_) => quote! { ::annotated::Visibility::Public },
        _ => quote! { ::annotated::Visibility::Restricted },
    }
}

fn parse_marker(attr: &Attribute, kind: Kind) -> syn::Result<Marker> {
    match kind {
        Kind::TypeOrMethod | Kind::Field => {
            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(Error::new_spanned(
                    attr,
                    format!("`#[{}]` takes no arguments", kind.attribute()),
                ));
            }
            Ok(if kind == Kind::Field { Marker::Field } else { Marker::TypeOrMethod })
        }
        Kind::Repeat => match &attr.meta {
            Meta::List(list) => {
                let times = list.parse_args_with(parse_times)?;
                Ok(Marker::Repeat { times })
            }
            _ => Err(Error::new_spanned(attr, REPEAT_USAGE)),
        },
    }
}

fn parse_times(input: ParseStream) -> syn::Result<u32> {
    let span = input.span();
    let args: Vec<IntArg> = parse_comma_separated(input)?;

    let mut times = None;
    for arg in args {
        if arg.key != "times" {
            return Err(Error::new_spanned(
                &arg.key,
                format!("unknown argument `{}`, expected `times`", arg.key),
            ));
        }
        if times.is_some() {
            return Err(Error::new_spanned(&arg.key, "duplicate `times` argument"));
        }
        times = Some(arg.value.base10_parse::<u32>()?);
    }
    times.ok_or_else(|| Error::new(span, REPEAT_USAGE))
}
