//! Contact form domain layer
//!
//! Pure validation and submission state. Timers and haptics are reached
//! through the ports in `crate::host`.

mod field;
mod form_state;
mod submission;
mod validator;

pub use field::{FieldName, FormField};
pub use form_state::ContactForm;
pub use submission::{
    ContactController, FormTimer, FormTimings, StatusKind, SubmissionPhase, SubmitOutcome,
};
