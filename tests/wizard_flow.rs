//! Integration tests for the scheduling wizard state machine driven through
//! the public library API.

use chrono::NaiveDate;
use hirepipe::directory::{Directory, MockDirectory};
use hirepipe::scheduling::{
    AvailabilityStatus, DraftRequest, InterviewType, ParticipantRole, ScheduleError,
    ScheduleWizard, SchedulingBackend, SimulatedBackend, WizardOptions, WizardOutcome,
    WizardStep,
};
use hirepipe::types::TeamMember;

fn team() -> Vec<TeamMember> {
    MockDirectory::new().list_team_members().unwrap()
}

fn member(id: u32) -> TeamMember {
    team().into_iter().find(|m| m.id == id).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

/// Wizard on Setup with a complete date range and the given participants
fn ready_wizard(options: WizardOptions, interview_type: InterviewType, ids: &[u32]) -> ScheduleWizard {
    let mut wizard = ScheduleWizard::new(7, options);
    let mode = wizard.date_mode();
    let draft = wizard.draft_mut();
    draft.set_interview_type(interview_type);
    draft.pick_date(day(20), mode);
    draft.pick_date(day(22), mode);
    for id in ids {
        draft.add_participant(member(*id)).unwrap();
    }
    wizard
}

struct RejectingBackend;

impl SchedulingBackend for RejectingBackend {
    fn submit(&self, _request: &DraftRequest) -> Result<(), ScheduleError> {
        Err(ScheduleError::SubmissionFailed("no slots".to_string()))
    }
}

#[test]
fn back_on_first_step_cancels() {
    let mut wizard = ScheduleWizard::new(1, WizardOptions::default());
    assert_eq!(wizard.back(), WizardOutcome::Cancelled);
    assert_eq!(wizard.step(), WizardStep::Setup);
}

#[test]
fn two_step_flow_completes_from_review() {
    let mut wizard = ready_wizard(WizardOptions::default(), InterviewType::Panel, &[1, 2, 3]);
    assert_eq!(wizard.steps(), &[WizardStep::Setup, WizardStep::Review]);

    assert_eq!(wizard.next(&SimulatedBackend), Ok(WizardOutcome::Continue));
    assert_eq!(wizard.primary_label(), "Schedule");

    match wizard.next(&SimulatedBackend) {
        Ok(WizardOutcome::Completed(draft)) => {
            assert_eq!(draft.candidate_id, 7);
            assert_eq!(draft.participants().len(), 3);
            assert_eq!(draft.dates().day_count(), Some(3));
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn three_step_flow_goes_through_confirm() {
    let options = WizardOptions {
        confirm_step: true,
        ..WizardOptions::default()
    };
    let mut wizard = ready_wizard(options, InterviewType::OneOnOne, &[1]);
    wizard.next(&SimulatedBackend).unwrap();
    wizard.next(&SimulatedBackend).unwrap();
    assert_eq!(wizard.step(), WizardStep::Confirm);
    assert!(matches!(
        wizard.next(&SimulatedBackend),
        Ok(WizardOutcome::Completed(_))
    ));
}

#[test]
fn rejected_submission_stays_on_review() {
    let mut wizard = ready_wizard(WizardOptions::default(), InterviewType::OneOnOne, &[4]);
    wizard.next(&RejectingBackend).unwrap();
    let err = wizard.next(&RejectingBackend).unwrap_err();
    assert_eq!(err, ScheduleError::SubmissionFailed("no slots".to_string()));
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn strict_validation_blocks_incomplete_setup() {
    let mut wizard = ScheduleWizard::new(1, WizardOptions::default());
    assert_eq!(wizard.next(&SimulatedBackend), Err(ScheduleError::MissingDate));

    let mode = wizard.date_mode();
    wizard.draft_mut().pick_date(day(20), mode);
    assert_eq!(
        wizard.next(&SimulatedBackend),
        Err(ScheduleError::IncompleteDateRange)
    );

    wizard.draft_mut().pick_date(day(20), mode);
    assert_eq!(
        wizard.next(&SimulatedBackend),
        Err(ScheduleError::NoParticipants)
    );
    assert_eq!(wizard.step(), WizardStep::Setup);
}

#[test]
fn permissive_mode_allows_empty_draft() {
    let options = WizardOptions {
        strict_validation: false,
        ..WizardOptions::default()
    };
    let mut wizard = ScheduleWizard::new(1, options);
    assert_eq!(wizard.next(&SimulatedBackend), Ok(WizardOutcome::Continue));
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn observer_mode_first_added_is_interviewer() {
    let ids = [5, 2, 6, 1];
    let wizard = ready_wizard(
        WizardOptions::default(),
        InterviewType::InterviewerPlusObservers,
        &ids,
    );
    let draft = wizard.draft();
    for (i, p) in draft.participants().iter().enumerate() {
        assert_eq!(p.id(), ids[i]);
        let expected = if i == 0 {
            ParticipantRole::Interviewer
        } else {
            ParticipantRole::Observer
        };
        assert_eq!(p.role, expected);
    }
}

#[test]
fn add_remove_sequences_never_duplicate_members() {
    let mut draft = DraftRequest::new(1);
    draft.set_interview_type(InterviewType::Panel);
    let ops: &[(bool, u32)] = &[
        (true, 1),
        (true, 2),
        (true, 1),
        (false, 2),
        (true, 2),
        (true, 2),
        (false, 9),
        (true, 3),
        (false, 1),
        (true, 1),
    ];
    for (add, id) in ops {
        if *add {
            let _ = draft.add_participant(member(*id));
        } else {
            draft.remove_participant(*id);
        }
        let mut ids: Vec<_> = draft.participants().iter().map(|p| p.id()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
    assert_eq!(draft.participants().len(), 3);
}

#[test]
fn one_on_one_never_admits_second_participant() {
    let mut draft = DraftRequest::new(1);
    draft.add_participant(member(1)).unwrap();
    for m in team().into_iter().skip(1) {
        assert!(draft.add_participant(m).is_err());
    }
    assert_eq!(draft.participants().len(), 1);
}

#[test]
fn availability_reduces_interviewers_before_observers() {
    let cases: &[(InterviewType, &[u32], AvailabilityStatus)] = &[
        (InterviewType::Panel, &[1, 2], AvailabilityStatus::AllAvailable),
        (InterviewType::Panel, &[1, 3], AvailabilityStatus::InterviewersUnavailable),
        (
            InterviewType::InterviewerPlusObservers,
            &[1, 3],
            AvailabilityStatus::ObserversUnavailable,
        ),
        (
            InterviewType::InterviewerPlusObservers,
            &[3, 5],
            AvailabilityStatus::InterviewersUnavailable,
        ),
    ];
    for (interview_type, ids, expected) in cases {
        let wizard = ready_wizard(WizardOptions::default(), *interview_type, ids);
        assert_eq!(wizard.draft().availability(), Some(*expected), "{ids:?}");
    }
    assert_eq!(DraftRequest::new(1).availability(), None);
}
