//! Field validation rules

mod validators;

pub use validators::*;
