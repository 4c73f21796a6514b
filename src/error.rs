//! Error types for invocation and field passes.

use alloc::borrow::Cow;

use thiserror::Error;

use crate::registry::MemberError;

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Why an [`AccessPolicy`](crate::AccessPolicy) refused a member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Denied(Cow<'static, str>);

impl Denied {
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// A marked method could not be invoked, or failed when invoked.
#[derive(Debug, Error)]
pub enum InvocationFailure {
    #[error("cannot invoke `{subject}::{method}`: {reason}")]
    Denied {
        subject: &'static str,
        method: &'static str,
        reason: Denied,
    },

    /// The method ran and returned an error. `call` is 1-based.
    #[error("`{subject}::{method}` failed on call {call}")]
    Target {
        subject: &'static str,
        method: &'static str,
        call: u32,
        source: MemberError,
    },
}

impl InvocationFailure {
    pub fn method(&self) -> &'static str {
        match self {
            InvocationFailure::Denied { method, .. } | InvocationFailure::Target { method, .. } => {
                method
            }
        }
    }
}

/// A marked field could not be read.
#[derive(Debug, Error)]
#[error("cannot read `{subject}.{field}`: {reason}")]
pub struct FieldAccessFailure {
    pub subject: &'static str,
    pub field: &'static str,
    pub reason: Denied,
}

/// Any failure of the runner. Always fatal to the pass that raised it.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Invocation(#[from] InvocationFailure),

    #[error(transparent)]
    FieldAccess(#[from] FieldAccessFailure),
}
