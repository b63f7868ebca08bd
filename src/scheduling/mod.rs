//! Interview scheduling: the draft request, its rules, and the wizard
//! state machine that edits it.

mod availability;
mod backend;
mod dates;
mod draft;
mod error;
mod wizard;

pub use availability::AvailabilityStatus;
pub use backend::{SchedulingBackend, SimulatedBackend};
pub use dates::{DateMode, DateSelection};
pub use draft::{DraftRequest, InterviewType, Participant, ParticipantRole};
pub use error::ScheduleError;
pub use wizard::{ScheduleWizard, WizardOptions, WizardOutcome, WizardStep};
