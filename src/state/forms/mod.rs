//! Form domain layer
//!
//! Field schema and validator, the draft accumulator, the step sequencer
//! and the focus/inline-error state the terminal form renders from.

mod draft;
mod field;
mod form_state;
pub mod schema;
mod steps;

pub use draft::Draft;
pub use field::{FieldKind, FieldSpec};
pub use form_state::{Form, FormButton, OnboardingForm};
pub use schema::{field_spec, names, validate_all, StepValidation, ValidationResult};
pub use steps::Step;
