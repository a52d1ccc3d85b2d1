//! Form rendering module
//!
//! - `field_renderer`: single field with label, value and inline error
//! - `contact_form`: the contact form with its send button and status line

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
