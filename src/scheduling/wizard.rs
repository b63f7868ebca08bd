//! Step state machine behind the AI schedule dialog.
//!
//! ```text
//! Setup ──next──▶ Review ──next──▶ [Confirm ──next──▶] closed (completed)
//!   │               │                 │
//!  back            back              back
//!   ▼               ▼                 ▼
//! closed         Setup             Review
//! (cancelled)
//! ```

use serde::{Deserialize, Serialize};

use super::{DateMode, DraftRequest, ScheduleError, SchedulingBackend};
use crate::types::CandidateId;

/// Feature flags that select between the wizard's variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardOptions {
    /// Show a separate Confirm step after Review
    #[serde(default)]
    pub confirm_step: bool,
    #[serde(default)]
    pub date_mode: DateMode,
    /// Show the recurring slots switch
    #[serde(default)]
    pub recurring_slots: bool,
    /// Refuse to leave Setup until the draft is complete
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

fn default_strict_validation() -> bool {
    true
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            confirm_step: false,
            date_mode: DateMode::Range,
            recurring_slots: false,
            strict_validation: default_strict_validation(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Setup,
    Review,
    Confirm,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Setup => "Setup",
            WizardStep::Review => "Review",
            WizardStep::Confirm => "Confirm",
        }
    }
}

/// Result of a navigation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Stay open on the (possibly new) current step
    Continue,
    /// Closed from the first step
    Cancelled,
    /// Closed from the last step
    Completed(DraftRequest),
}

pub struct ScheduleWizard {
    options: WizardOptions,
    steps: Vec<WizardStep>,
    index: usize,
    draft: DraftRequest,
}

impl ScheduleWizard {
    pub fn new(candidate_id: CandidateId, options: WizardOptions) -> Self {
        let mut steps = vec![WizardStep::Setup, WizardStep::Review];
        if options.confirm_step {
            steps.push(WizardStep::Confirm);
        }
        Self {
            options,
            steps,
            index: 0,
            draft: DraftRequest::new(candidate_id),
        }
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn step(&self) -> WizardStep {
        self.steps[self.index]
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    pub fn candidate_id(&self) -> CandidateId {
        self.draft.candidate_id
    }

    pub fn draft(&self) -> &DraftRequest {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftRequest {
        &mut self.draft
    }

    pub fn date_mode(&self) -> DateMode {
        self.options.date_mode
    }

    /// Label of the forward button
    pub fn primary_label(&self) -> &'static str {
        if !self.is_last() {
            "Next"
        } else if self.step() == WizardStep::Confirm {
            "Close"
        } else {
            "Schedule"
        }
    }

    /// Label of the backward button
    pub fn secondary_label(&self) -> &'static str {
        if self.is_first() {
            "Cancel"
        } else {
            "Back"
        }
    }

    /// Step back, or cancel from the first step
    pub fn back(&mut self) -> WizardOutcome {
        if self.is_first() {
            tracing::debug!(candidate = self.candidate_id(), "Schedule wizard cancelled");
            WizardOutcome::Cancelled
        } else {
            self.index -= 1;
            WizardOutcome::Continue
        }
    }

    /// Step forward, or finish from the last step.
    ///
    /// Leaving Review hands the draft to `backend`; on failure the wizard
    /// stays where it is.
    pub fn next(&mut self, backend: &dyn SchedulingBackend) -> Result<WizardOutcome, ScheduleError> {
        let step = self.step();

        if step == WizardStep::Setup && self.options.strict_validation {
            self.draft.validate()?;
        }

        if step == WizardStep::Review {
            if let Err(err) = backend.submit(&self.draft) {
                tracing::warn!(
                    candidate = self.candidate_id(),
                    error = %err,
                    "Scheduling request rejected"
                );
                return Err(err);
            }
        }

        if self.is_last() {
            tracing::info!(candidate = self.candidate_id(), "Schedule wizard completed");
            return Ok(WizardOutcome::Completed(self.draft.clone()));
        }

        self.index += 1;
        Ok(WizardOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::SimulatedBackend;
    use crate::types::TeamMember;
    use chrono::NaiveDate;
    use std::cell::Cell;

    struct CountingBackend {
        calls: Cell<usize>,
        fail: bool,
    }

    impl SchedulingBackend for CountingBackend {
        fn submit(&self, _request: &DraftRequest) -> Result<(), ScheduleError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(ScheduleError::SubmissionFailed("calendar offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn permissive() -> WizardOptions {
        WizardOptions {
            strict_validation: false,
            ..WizardOptions::default()
        }
    }

    fn fill(wizard: &mut ScheduleWizard) {
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mode = wizard.date_mode();
        let draft = wizard.draft_mut();
        draft.pick_date(day, mode);
        draft.pick_date(day, mode);
        draft
            .add_participant(TeamMember {
                id: 1,
                name: "Rajesh Kumar".to_string(),
                designation: "Senior Engineering Manager".to_string(),
                calendar_access: true,
                available: true,
            })
            .unwrap();
    }

    #[test]
    fn test_default_wizard_has_two_steps() {
        let wizard = ScheduleWizard::new(1, WizardOptions::default());
        assert_eq!(wizard.steps(), &[WizardStep::Setup, WizardStep::Review]);
        assert_eq!(wizard.step(), WizardStep::Setup);
        assert_eq!(wizard.primary_label(), "Next");
        assert_eq!(wizard.secondary_label(), "Cancel");
    }

    #[test]
    fn test_back_on_first_step_cancels() {
        let mut wizard = ScheduleWizard::new(1, WizardOptions::default());
        assert_eq!(wizard.back(), WizardOutcome::Cancelled);
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn test_strict_validation_blocks_incomplete_setup() {
        let mut wizard = ScheduleWizard::new(1, WizardOptions::default());
        assert_eq!(
            wizard.next(&SimulatedBackend),
            Err(ScheduleError::MissingDate)
        );
        assert_eq!(wizard.step(), WizardStep::Setup);
    }

    #[test]
    fn test_permissive_mode_advances_empty_draft() {
        let mut wizard = ScheduleWizard::new(1, permissive());
        assert_eq!(wizard.next(&SimulatedBackend), Ok(WizardOutcome::Continue));
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.primary_label(), "Schedule");
        assert_eq!(wizard.secondary_label(), "Back");
    }

    #[test]
    fn test_review_schedule_completes() {
        let mut wizard = ScheduleWizard::new(5, WizardOptions::default());
        fill(&mut wizard);
        assert_eq!(wizard.next(&SimulatedBackend), Ok(WizardOutcome::Continue));

        match wizard.next(&SimulatedBackend) {
            Ok(WizardOutcome::Completed(draft)) => {
                assert_eq!(draft.candidate_id, 5);
                assert_eq!(draft.participants().len(), 1);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_step_variant() {
        let options = WizardOptions {
            confirm_step: true,
            ..permissive()
        };
        let mut wizard = ScheduleWizard::new(1, options);
        let backend = CountingBackend {
            calls: Cell::new(0),
            fail: false,
        };

        wizard.next(&backend).unwrap();
        assert_eq!(wizard.primary_label(), "Next");
        wizard.next(&backend).unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert_eq!(wizard.primary_label(), "Close");
        assert_eq!(backend.calls.get(), 1);

        assert!(matches!(
            wizard.next(&backend),
            Ok(WizardOutcome::Completed(_))
        ));
        // Closing from Confirm does not submit twice
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_back_from_review_returns_to_setup() {
        let mut wizard = ScheduleWizard::new(1, permissive());
        wizard.next(&SimulatedBackend).unwrap();
        assert_eq!(wizard.back(), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::Setup);
    }

    #[test]
    fn test_failed_submission_keeps_wizard_on_review() {
        let mut wizard = ScheduleWizard::new(1, WizardOptions::default());
        fill(&mut wizard);
        wizard.next(&SimulatedBackend).unwrap();

        let backend = CountingBackend {
            calls: Cell::new(0),
            fail: true,
        };
        let err = wizard.next(&backend).unwrap_err();
        assert!(matches!(err, ScheduleError::SubmissionFailed(_)));
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: WizardOptions = toml::from_str("confirm_step = true").unwrap();
        assert!(options.confirm_step);
        assert_eq!(options.date_mode, DateMode::Range);
        assert!(options.strict_validation);
    }
}
