//! # Layer 2: Runner
//!
//! Marker-directed invocation and field reads over a subject's registry.
//!
//! ```text
//! check_type_marker     TYPE_MARKERS contains #[mark]            -> bool
//! invoke_single_marked  METHODS with #[mark], once each          -> calls made
//! invoke_repeat_marked  METHODS with #[mark_repeat], N times     -> calls made
//! read_marked_fields    FIELDS with #[mark_field]                -> FieldReadings
//! ```
//!
//! Every pass walks the registry in declaration order and stops at the first
//! failure. Nothing is retried.

mod policy;
mod readings;

pub use policy::{AccessPolicy, PublicOnly, Unrestricted};
pub use readings::FieldReadings;

use crate::error::{FieldAccessFailure, InvocationFailure};
use crate::marker::MarkerKind;
use crate::registry::{Annotated, AnnotatedMethods, MethodEntry};

/// Runs marker passes over subjects, guarded by an [`AccessPolicy`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationRunner<P = PublicOnly> {
    policy: P,
}

impl AnnotationRunner {
    /// A runner with the [`PublicOnly`] policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: AccessPolicy> AnnotationRunner<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Whether the subject's type carries `#[mark]`.
    pub fn check_type_marker<S: Annotated>(&self, _subject: &S) -> bool {
        let present = S::has_type_marker(MarkerKind::TypeOrMethod);
        tracing::debug!(subject = S::TYPE_NAME, present, "checked type marker");
        present
    }

    /// Invokes every `#[mark]` method once. Returns the number of calls made.
    pub fn invoke_single_marked<S: AnnotatedMethods>(
        &self,
        subject: &S,
    ) -> Result<usize, InvocationFailure> {
        let span = tracing::debug_span!("invoke_single_marked", subject = S::TYPE_NAME);
        let _enter = span.enter();

        let mut calls = 0;
        for method in S::METHODS.iter().filter(|m| m.has_marker(MarkerKind::TypeOrMethod)) {
            self.authorize(method)?;
            dispatch(method, subject, 1)?;
            calls += 1;
        }
        tracing::debug!(calls, "single pass done");
        Ok(calls)
    }

    /// Invokes every `#[mark_repeat(times = N)]` method N times in a row.
    /// Returns the number of calls made.
    pub fn invoke_repeat_marked<S: AnnotatedMethods>(
        &self,
        subject: &S,
    ) -> Result<usize, InvocationFailure> {
        let span = tracing::debug_span!("invoke_repeat_marked", subject = S::TYPE_NAME);
        let _enter = span.enter();

        let mut calls = 0;
        for method in S::METHODS {
            let Some(times) = method.marker(MarkerKind::Repeat).and_then(|m| m.times()) else {
                continue;
            };
            if times == 0 {
                tracing::trace!(method = method.name(), "times = 0, skipping");
                continue;
            }
            self.authorize(method)?;
            for call in 1..=times {
                dispatch(method, subject, call)?;
                calls += 1;
            }
        }
        tracing::debug!(calls, "repeat pass done");
        Ok(calls)
    }

    /// Reads every `#[mark_field]` field, restricted ones included.
    pub fn read_marked_fields<'s, S: Annotated>(
        &self,
        subject: &'s S,
    ) -> Result<FieldReadings<'s>, FieldAccessFailure> {
        let span = tracing::debug_span!("read_marked_fields", subject = S::TYPE_NAME);
        let _enter = span.enter();

        let mut readings = FieldReadings::with_capacity(S::FIELDS.len());
        for field in S::FIELDS.iter().filter(|f| f.has_marker(MarkerKind::Field)) {
            if let Err(reason) = self.policy.may_read(&field.member_ref(S::TYPE_NAME)) {
                tracing::warn!(field = field.name(), %reason, "field read denied");
                return Err(FieldAccessFailure {
                    subject: S::TYPE_NAME,
                    field: field.name(),
                    reason,
                });
            }
            let value = field.read(subject);
            tracing::trace!(field = field.name(), ?value, "read marked field");
            readings.push(field.name(), value);
        }
        Ok(readings)
    }

    fn authorize<S: AnnotatedMethods>(&self, method: &MethodEntry<S>) -> Result<(), InvocationFailure> {
        self.policy
            .may_invoke(&method.member_ref(S::TYPE_NAME))
            .map_err(|reason| {
                tracing::warn!(method = method.name(), %reason, "invocation denied");
                InvocationFailure::Denied {
                    subject: S::TYPE_NAME,
                    method: method.name(),
                    reason,
                }
            })
    }
}

fn dispatch<S: AnnotatedMethods>(
    method: &MethodEntry<S>,
    subject: &S,
    call: u32,
) -> Result<(), InvocationFailure> {
    tracing::trace!(method = method.name(), call, "invoking");
    method.call(subject).map_err(|source| InvocationFailure::Target {
        subject: S::TYPE_NAME,
        method: method.name(),
        call,
        source,
    })
}
