//! Domain records shown by the dashboard.
//!
//! Candidates and team members are immutable once loaded from a
//! [`Directory`](crate::directory::Directory).

mod candidate;
mod team;

pub use candidate::{
    filter_candidates, Candidate, CandidateId, ConsentStatus, RowAction, Stage,
};
pub use team::{MemberId, TeamMember};
