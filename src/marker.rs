//! Marker kinds and the targets they attach to.
//!
//! Markers are written as attributes and compiled into the registry:
//!
//! | Attribute | Kind | Targets |
//! |-----------|------|---------|
//! | `#[mark]` | [`MarkerKind::TypeOrMethod`] | type, method |
//! | `#[mark_repeat(times = N)]` | [`MarkerKind::Repeat`] | method |
//! | `#[mark_field]` | [`MarkerKind::Field`] | field |

use core::fmt;

/// Where a marker is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Type,
    Method,
    Field,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Type => "type",
            Target::Method => "method",
            Target::Field => "field",
        })
    }
}

/// Marker kind, without attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    TypeOrMethod,
    Repeat,
    Field,
}

impl MarkerKind {
    /// The capability set of this kind: the targets it may be declared on.
    ///
    /// `#[derive(Annotated)]` and `#[annotated_methods]` reject a marker
    /// placed anywhere else, so every [`Annotation`](crate::Annotation)
    /// reported by [`Inspect`](crate::Inspect) satisfies [`applies_to`](Self::applies_to).
    pub const fn targets(self) -> &'static [Target] {
        match self {
            MarkerKind::TypeOrMethod => &[Target::Type, Target::Method],
            MarkerKind::Repeat => &[Target::Method],
            MarkerKind::Field => &[Target::Field],
        }
    }

    pub fn applies_to(self, target: Target) -> bool {
        self.targets().contains(&target)
    }

    /// Attribute name used to declare this kind.
    pub const fn attribute(self) -> &'static str {
        match self {
            MarkerKind::TypeOrMethod => "mark",
            MarkerKind::Repeat => "mark_repeat",
            MarkerKind::Field => "mark_field",
        }
    }
}

/// A marker together with its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    TypeOrMethod,
    /// Invoke the method `times` times per pass. Zero skips it.
    Repeat { times: u32 },
    Field,
}

impl Marker {
    pub const fn kind(&self) -> MarkerKind {
        match self {
            Marker::TypeOrMethod => MarkerKind::TypeOrMethod,
            Marker::Repeat { .. } => MarkerKind::Repeat,
            Marker::Field => MarkerKind::Field,
        }
    }

    /// The `times` attribute, for `Repeat` markers.
    pub const fn times(&self) -> Option<u32> {
        match self {
            Marker::Repeat { times } => Some(*times),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Repeat { times } => write!(f, "#[mark_repeat(times = {times})]"),
            other => write!(f, "#[{}]", other.kind().attribute()),
        }
    }
}

/// First marker of `kind` in `markers`.
pub fn find(markers: &[Marker], kind: MarkerKind) -> Option<Marker> {
    markers.iter().copied().find(|m| m.kind() == kind)
}
