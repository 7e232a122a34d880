//! Form rendering module
//!
//! - `field_renderer`: text fields, the plan checklist and inline errors
//! - `onboarding_form`: the current step's fields and the action row

mod field_renderer;
mod onboarding_form;

pub use onboarding_form::draw_onboarding_form;
