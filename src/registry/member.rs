use alloc::boxed::Box;
use core::fmt;

use crate::marker::{self, Marker, MarkerKind, Target};

use super::value::FieldValue;

/// Error reported by a marked method.
pub type MemberError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Declared visibility of a registered member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`.
    Public,
    /// Anything narrower than `pub`, including `pub(crate)`.
    Restricted,
}

/// Identity of a member, as seen by an [`AccessPolicy`](crate::AccessPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRef {
    pub subject: &'static str,
    pub name: &'static str,
    pub target: Target,
    pub visibility: Visibility,
}

/// Return types a marked method may have.
#[diagnostic::on_unimplemented(
    message = "marked methods must return `()` or `Result<_, E>` with `E: Into<MemberError>`",
    label = "`{Self}` cannot be turned into an invocation outcome"
)]
pub trait IntoOutcome {
    fn into_outcome(self) -> Result<(), MemberError>;
}

impl IntoOutcome for () {
    #[inline]
    fn into_outcome(self) -> Result<(), MemberError> {
        Ok(())
    }
}

impl<T, E: Into<MemberError>> IntoOutcome for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Result<(), MemberError> {
        self.map(|_| ()).map_err(Into::into)
    }
}

// =============================================================================
// Methods
// =============================================================================

/// A marked method of `S`.
pub struct MethodEntry<S: 'static> {
    name: &'static str,
    visibility: Visibility,
    markers: &'static [Marker],
    call: fn(&S) -> Result<(), MemberError>,
}

impl<S: 'static> MethodEntry<S> {
    /// Used by generated code.
    #[doc(hidden)]
    pub const fn new(
        name: &'static str,
        visibility: Visibility,
        markers: &'static [Marker],
        call: fn(&S) -> Result<(), MemberError>,
    ) -> Self {
        Self { name, visibility, markers, call }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn markers(&self) -> &'static [Marker] {
        self.markers
    }

    /// The marker of `kind` on this method, with its attributes.
    pub fn marker(&self, kind: MarkerKind) -> Option<Marker> {
        marker::find(self.markers, kind)
    }

    pub fn has_marker(&self, kind: MarkerKind) -> bool {
        self.marker(kind).is_some()
    }

    pub fn member_ref(&self, subject: &'static str) -> MemberRef {
        MemberRef {
            subject,
            name: self.name,
            target: Target::Method,
            visibility: self.visibility,
        }
    }

    pub(crate) fn call(&self, subject: &S) -> Result<(), MemberError> {
        (self.call)(subject)
    }
}

impl<S: 'static> Clone for MethodEntry<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for MethodEntry<S> {}

impl<S: 'static> fmt::Debug for MethodEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodEntry")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Fields
// =============================================================================

/// A marked field of `S`.
pub struct FieldEntry<S: 'static> {
    name: &'static str,
    visibility: Visibility,
    markers: &'static [Marker],
    read: fn(&S) -> &(dyn FieldValue + 'static),
}

impl<S: 'static> FieldEntry<S> {
    /// Used by generated code.
    #[doc(hidden)]
    pub const fn new(
        name: &'static str,
        visibility: Visibility,
        markers: &'static [Marker],
        read: fn(&S) -> &(dyn FieldValue + 'static),
    ) -> Self {
        Self { name, visibility, markers, read }
    }

    /// Field name; tuple fields use their index.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn markers(&self) -> &'static [Marker] {
        self.markers
    }

    pub fn has_marker(&self, kind: MarkerKind) -> bool {
        marker::find(self.markers, kind).is_some()
    }

    pub fn member_ref(&self, subject: &'static str) -> MemberRef {
        MemberRef {
            subject,
            name: self.name,
            target: Target::Field,
            visibility: self.visibility,
        }
    }

    pub(crate) fn read<'s>(&self, subject: &'s S) -> &'s (dyn FieldValue + 'static) {
        (self.read)(subject)
    }
}

impl<S: 'static> Clone for FieldEntry<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for FieldEntry<S> {}

impl<S: 'static> fmt::Debug for FieldEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    struct Probe {
        count: i32,
    }

    fn ok(_: &Probe) -> Result<(), MemberError> {
        ().into_outcome()
    }

    fn fails(_: &Probe) -> Result<(), MemberError> {
        Err::<(), _>(String::from("boom")).into_outcome()
    }

    fn read_count(probe: &Probe) -> &(dyn FieldValue + 'static) {
        &probe.count
    }

    #[test]
    fn test_method_entry_markers() {
        let entry = MethodEntry::new("ok", Visibility::Public, &[Marker::Repeat { times: 2 }], ok);
        assert_eq!(entry.marker(MarkerKind::Repeat), Some(Marker::Repeat { times: 2 }));
        assert!(!entry.has_marker(MarkerKind::TypeOrMethod));
        assert!(entry.call(&Probe { count: 0 }).is_ok());
    }

    #[test]
    fn test_method_error_is_boxed() {
        let entry = MethodEntry::new("fails", Visibility::Restricted, &[], fails);
        let err = entry.call(&Probe { count: 0 }).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_field_entry_reads_through_accessor() {
        let entry = FieldEntry::new("count", Visibility::Restricted, &[Marker::Field], read_count);
        let probe = Probe { count: 7 };
        assert_eq!(entry.read(&probe).downcast_ref::<i32>(), Some(&7));
        assert_eq!(entry.member_ref("Probe").target, Target::Field);
    }
}
