// Common utilities shared between the user-facing macros
//
// This module contains:
// - markers: marker attribute parsing and validation
// - parse_utils: Common parsing helpers

mod markers;
mod parse_utils;

pub use markers::*;
pub use parse_utils::*;
