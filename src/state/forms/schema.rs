//! Onboarding field schema and validator
//!
//! Validation is a pure function of the schema and a draft. Failures are
//! returned as data, one `ValidationResult` per field.

use super::draft::Draft;
use super::field::{FieldKind, FieldSpec, FormatRule};
use super::steps::Step;
use crate::catalog::MarketingPlan;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Draft keys
pub mod names {
    pub const COMPANY: &str = "company";
    pub const WEBSITE: &str = "website";
    pub const CONTACT_NAME: &str = "contactName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const GOALS: &str = "goals";
    pub const SERVICES: &str = "services";
    pub const BUDGET: &str = "budget";
    pub const TIMELINE: &str = "timeline";
}

/// Every field, grouped by step in display order
pub static FIELD_SPECS: [FieldSpec; 9] = [
    FieldSpec {
        name: names::COMPANY,
        label: "Company / Brand",
        placeholder: "Acme Co.",
        kind: FieldKind::Text,
        required: true,
        rule: FormatRule::MinLength(2),
        message: "Company name is required",
        step: Step::Brand,
    },
    FieldSpec {
        name: names::WEBSITE,
        label: "Website (optional)",
        placeholder: "https://yourwebsite.com",
        kind: FieldKind::Url,
        required: false,
        rule: FormatRule::AbsoluteUrl,
        message: "Provide a valid URL",
        step: Step::Brand,
    },
    FieldSpec {
        name: names::GOALS,
        label: "Main goals",
        placeholder: "Grow Instagram reach, launch brand campaign, boost conversions…",
        kind: FieldKind::LongText,
        required: true,
        rule: FormatRule::MinLength(10),
        message: "Tell us a bit more about your goals",
        step: Step::Objectives,
    },
    FieldSpec {
        name: names::SERVICES,
        label: "Marketing Plans (Select all that interest you)",
        placeholder: "",
        kind: FieldKind::MultiSelect,
        required: true,
        rule: FormatRule::CatalogSelection,
        message: "Please select at least one marketing plan",
        step: Step::Objectives,
    },
    FieldSpec {
        name: names::BUDGET,
        label: "Monthly budget (range)",
        placeholder: "₹20,000–₹50,000",
        kind: FieldKind::Text,
        required: true,
        rule: FormatRule::MinLength(1),
        message: "Budget is required",
        step: Step::Plan,
    },
    FieldSpec {
        name: names::TIMELINE,
        label: "Timeline",
        placeholder: "e.g., Start next month",
        kind: FieldKind::Text,
        required: true,
        rule: FormatRule::MinLength(1),
        message: "Timeline is required",
        step: Step::Plan,
    },
    FieldSpec {
        name: names::CONTACT_NAME,
        label: "Your name",
        placeholder: "Jane Doe",
        kind: FieldKind::Text,
        required: true,
        rule: FormatRule::MinLength(2),
        message: "Your name is required",
        step: Step::Contact,
    },
    FieldSpec {
        name: names::EMAIL,
        label: "Email",
        placeholder: "you@company.com",
        kind: FieldKind::Email,
        required: true,
        rule: FormatRule::Email,
        message: "Valid email required",
        step: Step::Contact,
    },
    FieldSpec {
        name: names::PHONE,
        label: "Phone",
        placeholder: "9876543210",
        kind: FieldKind::Phone,
        required: true,
        rule: FormatRule::IndianMobile,
        message: "Enter valid 10-digit Indian mobile number",
        step: Step::Contact,
    },
];

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .unwrap();
    static ref MOBILE_RE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
}

/// Outcome of checking one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub field: String,
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok(spec: &FieldSpec) -> Self {
        Self {
            field: spec.name.to_string(),
            valid: true,
            message: None,
        }
    }

    fn fail(spec: &FieldSpec, message: impl Into<String>) -> Self {
        Self {
            field: spec.name.to_string(),
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Outcome of checking a group of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    pub valid: bool,
    pub results: Vec<ValidationResult>,
}

impl StepValidation {
    fn from_results(results: Vec<ValidationResult>) -> Self {
        Self {
            valid: results.iter().all(|r| r.valid),
            results,
        }
    }

    /// Failing results only
    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Failure message for a field, if it failed
    #[allow(dead_code)]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.field == field)
            .and_then(|r| r.message.as_deref())
    }
}

/// Fields owned by a step, in display order
pub fn fields_for_step(step: Step) -> impl Iterator<Item = &'static FieldSpec> {
    FIELD_SPECS.iter().filter(move |spec| spec.step == step)
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.name == name)
}

/// Check one field of the draft against its spec
pub fn validate_field(spec: &FieldSpec, draft: &Draft) -> ValidationResult {
    let present = draft.get(spec.name).is_some_and(|v| !v.is_empty());
    if !present && !spec.required {
        return ValidationResult::ok(spec);
    }

    let text = draft.text(spec.name);
    let passes = match spec.rule {
        FormatRule::MinLength(min) => text.chars().count() >= min,
        FormatRule::AbsoluteUrl => url::Url::parse(text).is_ok(),
        FormatRule::Email => is_email(text),
        FormatRule::IndianMobile => MOBILE_RE.is_match(text),
        FormatRule::CatalogSelection => {
            let selected = draft.selections(spec.name);
            if let Some(unknown) = selected
                .iter()
                .find(|id| MarketingPlan::from_id(id).is_none())
            {
                return ValidationResult::fail(spec, format!("Unknown marketing plan: {unknown}"));
            }
            !selected.is_empty()
        }
    };

    if passes {
        ValidationResult::ok(spec)
    } else {
        ValidationResult::fail(spec, spec.message)
    }
}

/// Check the fields a step owns
pub fn validate_step(step: Step, draft: &Draft) -> StepValidation {
    StepValidation::from_results(
        fields_for_step(step)
            .map(|spec| validate_field(spec, draft))
            .collect(),
    )
}

/// Check every field of the schema
pub fn validate_all(draft: &Draft) -> StepValidation {
    StepValidation::from_results(
        FIELD_SPECS
            .iter()
            .map(|spec| validate_field(spec, draft))
            .collect(),
    )
}

fn is_email(text: &str) -> bool {
    !text.starts_with('.') && !text.contains("..") && EMAIL_RE.is_match(text)
}
