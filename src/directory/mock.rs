use super::{Directory, DirectoryError};
use crate::types::{Candidate, ConsentStatus, Stage, TeamMember};

/// Built-in fixture data used when no roster file is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDirectory;

impl MockDirectory {
    pub fn new() -> Self {
        Self
    }
}

type CandidateRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    ConsentStatus,
    Stage,
    &'static str,
    &'static str,
);

fn candidate(row: CandidateRow) -> Candidate {
    let (id, name, email, position, status, stage, location, experience) = row;
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
        status,
        stage,
        location: location.to_string(),
        experience: experience.to_string(),
        has_interview: false,
    }
}

fn member(
    id: u32,
    name: &str,
    designation: &str,
    calendar_access: bool,
    available: bool,
) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        designation: designation.to_string(),
        calendar_access,
        available,
    }
}

impl Directory for MockDirectory {
    fn list_candidates(&self) -> Result<Vec<Candidate>, DirectoryError> {
        use ConsentStatus::{Available, ConsentExpiring};

        let rows: [CandidateRow; 6] = [
            (
                1,
                "Sarah Johnson",
                "sarah.johnson@email.com",
                "Senior Frontend Developer",
                Available,
                Stage::ScheduleInterview,
                "San Francisco, CA",
                "5+ years",
            ),
            (
                2,
                "Michael Chen",
                "michael.chen@email.com",
                "Full Stack Engineer",
                ConsentExpiring,
                Stage::ScheduleInterview,
                "New York, NY",
                "3+ years",
            ),
            (
                3,
                "Emily Rodriguez",
                "emily.rodriguez@email.com",
                "UX Designer",
                Available,
                Stage::ScheduleInterview,
                "Austin, TX",
                "4+ years",
            ),
            (
                4,
                "David Kim",
                "david.kim@email.com",
                "Backend Developer",
                Available,
                Stage::ShortList,
                "Seattle, WA",
                "6+ years",
            ),
            (
                5,
                "Jessica Taylor",
                "jessica.taylor@email.com",
                "Product Manager",
                ConsentExpiring,
                Stage::ShortList,
                "Boston, MA",
                "7+ years",
            ),
            (
                6,
                "Alex Thompson",
                "alex.thompson@email.com",
                "Data Scientist",
                Available,
                Stage::Screen,
                "Chicago, IL",
                "2+ years",
            ),
        ];
        let mut candidates: Vec<Candidate> = rows.into_iter().map(candidate).collect();
        // Michael already has a slot booked, so his row offers a reschedule
        if let Some(michael) = candidates.iter_mut().find(|c| c.id == 2) {
            michael.has_interview = true;
        }
        Ok(candidates)
    }

    fn list_team_members(&self) -> Result<Vec<TeamMember>, DirectoryError> {
        Ok(vec![
            member(1, "Rajesh Kumar", "Senior Engineering Manager", true, true),
            member(2, "Meera Gupta", "Tech Lead", true, true),
            member(3, "Sanjay Verma", "Principal Engineer", true, false),
            member(4, "Deepika Rao", "HR Business Partner", false, true),
            member(5, "Arun Nair", "Product Manager", true, false),
            member(6, "Shreya Jain", "Senior Developer", false, true),
        ])
    }

    fn source_name(&self) -> String {
        "built-in".to_string()
    }
}
