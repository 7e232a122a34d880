//! Step sequence for the onboarding form
//!
//! Four linear steps. Moving forward is gated on the active step's fields
//! validating against the draft; moving back is never gated.

use super::draft::Draft;
use super::schema::{validate_step, StepValidation};

/// One page of the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Brand,
    Objectives,
    Plan,
    Contact,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 4] = [Self::Brand, Self::Objectives, Self::Plan, Self::Contact];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        match self {
            Self::Brand => 0,
            Self::Objectives => 1,
            Self::Plan => 2,
            Self::Contact => 3,
        }
    }

    /// Step at `index`, clamped into range
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Objectives => "Objectives",
            Self::Plan => "Plan",
            Self::Contact => "Contact",
        }
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    /// The step submission is triggered from
    pub fn is_terminal(&self) -> bool {
        self.index() == Self::COUNT - 1
    }
}

/// Tracks the visible step of a single form session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequencer {
    current: Step,
}

impl StepSequencer {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current.index()
    }

    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Validate the active step and move forward one step if it passes.
    ///
    /// On failure the index is unchanged and the per-field results are
    /// returned so they can be shown next to the fields. On the terminal
    /// step a passing check leaves the index where it is.
    pub fn advance(&mut self, draft: &Draft) -> Result<Step, StepValidation> {
        let check = validate_step(self.current, draft);
        if !check.valid {
            tracing::debug!(step = self.current.title(), "step gate rejected advance");
            return Err(check);
        }
        self.current = Step::from_index(self.current.index() + 1);
        tracing::debug!(step = self.current.title(), "advanced");
        Ok(self.current)
    }

    /// Move back one step. Never validated, never below the first step.
    pub fn retreat(&mut self) -> Step {
        self.current = Step::from_index(self.current.index().saturating_sub(1));
        self.current
    }

    /// Return to the first step
    pub fn reset(&mut self) {
        self.current = Step::default();
    }
}
