//! # Layer 1: Registry
//!
//! Compile-time tables describing a subject's marked members.
//!
//! - **Subject traits**: `Annotated` (type markers, marked fields) and
//!   `AnnotatedMethods` (marked methods), generated by the derive and the
//!   `#[annotated_methods]` attribute.
//! - **Entries**: `MethodEntry` and `FieldEntry` pair a member's name, visibility
//!   and markers with a typed function pointer, so dispatch is a direct call.
//! - **Inspection**: `Inspect` walks every marker of a subject in declaration order.

pub mod member;
pub mod subject;
pub mod value;
pub mod inspect;

pub use member::{FieldEntry, IntoOutcome, MemberError, MemberRef, MethodEntry, Visibility};
pub use subject::{Annotated, AnnotatedMethods};
pub use value::FieldValue;
pub use inspect::{Annotation, Inspect};
