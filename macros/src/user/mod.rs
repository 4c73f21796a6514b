//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Annotated)]` | on struct | Type markers and marked fields |
//! | `#[annotated_methods]` | on inherent impl | Marked methods |

mod annotated;
mod methods;

pub use annotated::expand_derive_annotated;
pub use methods::expand_annotated_methods;
