//! Runtime inspection of a subject's markers
//!
//! Allows iterating over every marker in the registry for debugging and logging.

use crate::marker::{Marker, Target};

use super::subject::AnnotatedMethods;

/// One marker occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub target: Target,
    /// Member name; the type name for `Target::Type`.
    pub member: &'static str,
    pub marker: Marker,
}

/// Runtime inspection of a subject's registry.
pub trait Inspect {
    /// Calls `f` for each marker: type markers first, then fields, then
    /// methods, each in declaration order.
    fn inspect<F: FnMut(Annotation)>(f: F);
}

impl<S: AnnotatedMethods> Inspect for S {
    fn inspect<F: FnMut(Annotation)>(mut f: F) {
        let mut emit = |target: Target, member: &'static str, marker: Marker| {
            // Generated tables never place a marker outside its kind's targets
            debug_assert!(marker.kind().applies_to(target), "{marker} on {target} `{member}`");
            f(Annotation { target, member, marker });
        };

        for &marker in S::TYPE_MARKERS {
            emit(Target::Type, S::TYPE_NAME, marker);
        }
        for field in S::FIELDS {
            for &marker in field.markers() {
                emit(Target::Field, field.name(), marker);
            }
        }
        for method in S::METHODS {
            for &marker in method.markers() {
                emit(Target::Method, method.name(), marker);
            }
        }
    }
}
