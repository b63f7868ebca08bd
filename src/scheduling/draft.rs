use std::fmt;

use chrono::NaiveDate;

use super::{AvailabilityStatus, DateMode, DateSelection, ScheduleError};
use crate::types::{CandidateId, MemberId, TeamMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterviewType {
    #[default]
    OneOnOne,
    Panel,
    InterviewerPlusObservers,
}

impl InterviewType {
    pub fn all() -> &'static [InterviewType] {
        &[
            InterviewType::OneOnOne,
            InterviewType::Panel,
            InterviewType::InterviewerPlusObservers,
        ]
    }

    /// Label on the type selector card
    pub fn label(&self) -> &'static str {
        match self {
            InterviewType::OneOnOne => "1:1 Interview",
            InterviewType::Panel => "Panel Interview",
            InterviewType::InterviewerPlusObservers => "Interviewer + Observers",
        }
    }

    /// Short label used on the review step
    pub fn short_label(&self) -> &'static str {
        match self {
            InterviewType::OneOnOne => "1:1",
            InterviewType::Panel => "panel",
            InterviewType::InterviewerPlusObservers => "interviewer + observers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InterviewType::OneOnOne => "◉",
            InterviewType::Panel => "◉◉◉ 3+",
            InterviewType::InterviewerPlusObservers => "◉ + ◎",
        }
    }

    pub fn max_participants(&self) -> Option<usize> {
        match self {
            InterviewType::OneOnOne => Some(1),
            _ => None,
        }
    }

    /// Whether participants are split into interviewer and observers
    pub fn has_observers(&self) -> bool {
        matches!(self, InterviewType::InterviewerPlusObservers)
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantRole {
    Interviewer,
    Observer,
}

impl ParticipantRole {
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantRole::Interviewer => "Interviewer",
            ParticipantRole::Observer => "Observer",
        }
    }
}

/// A team member copied into the draft with an assigned role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub member: TeamMember,
    pub role: ParticipantRole,
}

impl Participant {
    pub fn id(&self) -> MemberId {
        self.member.id
    }
}

/// Ephemeral per-wizard scheduling request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    pub candidate_id: CandidateId,
    interview_type: InterviewType,
    dates: DateSelection,
    pub recurring_slots: bool,
    participants: Vec<Participant>,
}

impl DraftRequest {
    pub fn new(candidate_id: CandidateId) -> Self {
        Self {
            candidate_id,
            interview_type: InterviewType::default(),
            dates: DateSelection::None,
            recurring_slots: false,
            participants: Vec::new(),
        }
    }

    pub fn interview_type(&self) -> InterviewType {
        self.interview_type
    }

    pub fn dates(&self) -> DateSelection {
        self.dates
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn interviewers(&self) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(|p| p.role == ParticipantRole::Interviewer)
    }

    pub fn observers(&self) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(|p| p.role == ParticipantRole::Observer)
    }

    pub fn has_interviewer(&self) -> bool {
        self.interviewers().next().is_some()
    }

    pub fn is_selected(&self, id: MemberId) -> bool {
        self.participants.iter().any(|p| p.id() == id)
    }

    /// Role the next added member would receive
    pub fn next_role(&self) -> ParticipantRole {
        if self.interview_type.has_observers() && self.has_interviewer() {
            ParticipantRole::Observer
        } else {
            ParticipantRole::Interviewer
        }
    }

    /// Add a team member, assigning a role first-come-first-served
    pub fn add_participant(&mut self, member: TeamMember) -> Result<ParticipantRole, ScheduleError> {
        if self.is_selected(member.id) {
            return Err(ScheduleError::DuplicateParticipant(member.id));
        }
        if let Some(limit) = self.interview_type.max_participants() {
            if self.participants.len() >= limit {
                return Err(ScheduleError::ParticipantLimit {
                    interview_type: self.interview_type,
                    limit,
                });
            }
        }

        let role = self.next_role();
        tracing::debug!(
            candidate = self.candidate_id,
            member = member.id,
            role = role.label(),
            "Participant added"
        );
        self.participants.push(Participant { member, role });
        Ok(role)
    }

    pub fn remove_participant(&mut self, id: MemberId) -> Option<Participant> {
        let pos = self.participants.iter().position(|p| p.id() == id)?;
        Some(self.participants.remove(pos))
    }

    /// Switch interview type and re-normalize participants.
    ///
    /// Returns the participants that no longer fit the new type.
    pub fn set_interview_type(&mut self, interview_type: InterviewType) -> Vec<Participant> {
        if self.interview_type == interview_type {
            return Vec::new();
        }
        self.interview_type = interview_type;

        let dropped = match interview_type.max_participants() {
            Some(limit) if self.participants.len() > limit => self.participants.split_off(limit),
            _ => Vec::new(),
        };

        for (i, participant) in self.participants.iter_mut().enumerate() {
            participant.role = if interview_type.has_observers() && i > 0 {
                ParticipantRole::Observer
            } else {
                ParticipantRole::Interviewer
            };
        }

        if !dropped.is_empty() {
            tracing::debug!(
                dropped = dropped.len(),
                interview_type = %interview_type,
                "Participants dropped on type change"
            );
        }
        dropped
    }

    pub fn pick_date(&mut self, date: NaiveDate, mode: DateMode) {
        self.dates = self.dates.pick(date, mode);
    }

    pub fn clear_dates(&mut self) {
        self.dates = DateSelection::None;
    }

    /// Availability summary, or `None` while nobody is selected
    pub fn availability(&self) -> Option<AvailabilityStatus> {
        if self.participants.is_empty() {
            return None;
        }
        Some(AvailabilityStatus::reduce(
            self.interviewers().map(|p| p.member.available),
            self.observers().map(|p| p.member.available),
        ))
    }

    /// Check the draft is complete enough to review
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self.dates {
            DateSelection::None => return Err(ScheduleError::MissingDate),
            DateSelection::Range { end: None, .. } => {
                return Err(ScheduleError::IncompleteDateRange)
            }
            _ => {}
        }
        if self.participants.is_empty() {
            return Err(ScheduleError::NoParticipants);
        }
        if self.interview_type.has_observers() && !self.has_interviewer() {
            return Err(ScheduleError::MissingInterviewer);
        }
        Ok(())
    }
}
