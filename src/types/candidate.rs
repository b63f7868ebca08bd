use serde::{Deserialize, Serialize};

/// Opaque candidate identifier, passed through the UI unvalidated
pub type CandidateId = u32;

/// Whether the candidate's agreement to be contacted is still valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentStatus {
    Available,
    ConsentExpiring,
}

impl ConsentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConsentStatus::Available => "Available",
            ConsentStatus::ConsentExpiring => "Consent expiring",
        }
    }
}

/// Where the candidate currently sits in the hiring pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Schedule interview", alias = "schedule-interview")]
    ScheduleInterview,
    #[serde(rename = "Short list", alias = "short-list")]
    ShortList,
    #[serde(rename = "Screen", alias = "screen")]
    Screen,
    #[serde(rename = "Hired", alias = "hired")]
    Hired,
    #[serde(rename = "Rejected", alias = "rejected")]
    Rejected,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::ScheduleInterview => "Schedule interview",
            Stage::ShortList => "Short list",
            Stage::Screen => "Screen",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }

    /// Terminal stages have no process left to schedule for
    pub fn is_active(&self) -> bool {
        !matches!(self, Stage::Hired | Stage::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub status: ConsentStatus,
    pub stage: Stage,
    pub location: String,
    pub experience: String,
    /// Set when an interview is already on the calendar
    #[serde(default)]
    pub has_interview: bool,
}

impl Candidate {
    /// Case-insensitive substring match against name, email and position.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
    }
}

/// Filter candidates by a free-text query
pub fn filter_candidates<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.matches_lowercase(&needle))
        .collect()
}

/// Row action offered for a candidate in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Schedule,
    Reschedule,
}

impl RowAction {
    pub fn for_candidate(candidate: &Candidate) -> Option<RowAction> {
        if !candidate.stage.is_active() {
            return None;
        }
        if candidate.has_interview {
            Some(RowAction::Reschedule)
        } else {
            Some(RowAction::Schedule)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Schedule => "Schedule",
            RowAction::Reschedule => "Reschedule",
        }
    }
}
