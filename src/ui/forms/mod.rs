//! Form rendering module
//!
//! - `field_renderer`: input boxes with inline validation errors
//! - `registration_form`: the registration card

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
