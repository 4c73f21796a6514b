#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the walkthrough module
// - cli: default, builds the annotations-demo binary

//! # annotated
//!
//! Marker-driven discovery and dispatch backed by a compile-time registry.
//!
//! **Annotations without runtime reflection.**
//!
//! ## Architecture
//!
//! Markers are attributes on a subject type, its methods and its fields. The
//! macros compile them into `const` tables; the runner walks those tables.
//!
//! ```text
//! #[mark] / #[mark_repeat(times = N)] / #[mark_field]
//!     -> derive / #[annotated_methods]   (definition-time checks)
//!     -> Annotated::{TYPE_MARKERS, FIELDS}, AnnotatedMethods::METHODS
//!     -> AnnotationRunner passes          (direct fn-pointer calls)
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Markers                                                 |
//! |  - Marker, MarkerKind, Target (capability sets)                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Registry                                                |
//! |  - Annotated, AnnotatedMethods, MethodEntry, FieldEntry, Inspect  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Runner                                                  |
//! |  - AnnotationRunner, AccessPolicy, FieldReadings, errors          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use annotated::prelude::*;
//!
//! #[derive(Annotated)]
//! #[mark]
//! struct Job {
//!     #[mark_field]
//!     retries: i32,
//! }
//!
//! #[annotated_methods]
//! impl Job {
//!     #[mark]
//!     pub fn start(&self) { println!("start"); }
//!
//!     #[mark_repeat(times = 2)]
//!     pub fn tick(&self) { println!("tick"); }
//! }
//!
//! let job = Job { retries: 1 };
//! let runner = AnnotationRunner::new();
//! assert!(runner.check_type_marker(&job));
//! runner.invoke_single_marked(&job)?;  // start
//! runner.invoke_repeat_marked(&job)?;  // tick, tick
//! let fields = runner.read_marked_fields(&job)?;
//! assert_eq!(fields.get("retries").and_then(|v| v.downcast_ref::<i32>()), Some(&1));
//! ```

// Allow `::annotated` to work inside the crate itself
extern crate self as annotated;

extern crate alloc;

// =============================================================================
// Layer 0: Markers
// =============================================================================
pub mod marker;

// =============================================================================
// Layer 1: Registry
// =============================================================================
pub mod registry;

// =============================================================================
// Layer 2: Runner
// =============================================================================
pub mod error;
pub mod runner;

// =============================================================================
// Walkthrough
// =============================================================================
#[cfg(feature = "std")]
pub mod demo;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use marker::{Marker, MarkerKind, Target};
pub use registry::{
    Annotated, AnnotatedMethods, Annotation, FieldEntry, FieldValue, Inspect, IntoOutcome,
    MemberError, MemberRef, MethodEntry, Visibility,
};
pub use error::{Denied, Error, FieldAccessFailure, InvocationFailure, Result};
pub use runner::{AccessPolicy, AnnotationRunner, FieldReadings, PublicOnly, Unrestricted};

// Re-export proc-macros
pub use macros::{Annotated, annotated_methods};

/// Common items for declaring and running annotated subjects.
pub mod prelude {
    pub use crate::marker::{Marker, MarkerKind};
    pub use crate::registry::{Annotated, AnnotatedMethods, FieldValue, Inspect};
    pub use crate::runner::{AccessPolicy, AnnotationRunner, PublicOnly, Unrestricted};
    pub use macros::{Annotated, annotated_methods};
}
