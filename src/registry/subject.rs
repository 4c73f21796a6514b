//! The per-type registry traits.
//!
//! Both traits are generated; implementing them by hand is possible but the
//! tables must list members in declaration order.

use crate::marker::{self, Marker, MarkerKind};

use super::member::{FieldEntry, MethodEntry};

/// A subject type with its type-level markers and marked fields.
///
/// Generated by `#[derive(Annotated)]`.
pub trait Annotated: Sized + 'static {
    /// Type name, as written at the definition.
    const TYPE_NAME: &'static str;

    /// Markers declared on the type itself.
    const TYPE_MARKERS: &'static [Marker];

    /// Marked fields, in declaration order. Unmarked fields are not listed.
    const FIELDS: &'static [FieldEntry<Self>];

    /// Whether the type itself carries a marker of `kind`.
    ///
    /// Independent of any marker on the members.
    fn has_type_marker(kind: MarkerKind) -> bool {
        marker::find(Self::TYPE_MARKERS, kind).is_some()
    }
}

/// A subject type with marked methods.
///
/// Generated by `#[annotated_methods]` on the type's inherent `impl` block.
pub trait AnnotatedMethods: Annotated {
    /// Marked methods, in declaration order. Unmarked methods are not listed.
    const METHODS: &'static [MethodEntry<Self>];
}
