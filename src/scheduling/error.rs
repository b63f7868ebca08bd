use thiserror::Error;

use super::InterviewType;
use crate::types::MemberId;

/// Reasons a draft scheduling request cannot move forward
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("select a date before continuing")]
    MissingDate,
    #[error("select an end date to complete the range")]
    IncompleteDateRange,
    #[error("add at least one participant")]
    NoParticipants,
    #[error("add an interviewer before adding observers")]
    MissingInterviewer,
    #[error("team member {0} is already a participant")]
    DuplicateParticipant(MemberId),
    #[error("{interview_type} interviews allow only {limit} participant(s)")]
    ParticipantLimit {
        interview_type: InterviewType,
        limit: usize,
    },
    #[error("scheduling request failed: {0}")]
    SubmissionFailed(String),
}
