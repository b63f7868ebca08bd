//! AI schedule dialog: keyboard front end for `ScheduleWizard`.

use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListState, Paragraph},
    Frame,
};

use super::calendar::CalendarState;
use super::dialogs::centered_rect;
use crate::scheduling::{
    DateMode, DraftRequest, InterviewType, Participant, ScheduleError, ScheduleWizard,
    SchedulingBackend, WizardOptions, WizardOutcome, WizardStep,
};
use crate::types::{CandidateId, TeamMember};

pub mod steps;


/// Focusable sections of the Setup step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupSection {
    InterviewType,
    Dates,
    Recurring,
    Participants,
}

impl SetupSection {
    pub fn title(&self) -> &'static str {
        match self {
            SetupSection::InterviewType => "Interview Type",
            SetupSection::Dates => "Select Date",
            SetupSection::Recurring => "Recurring slots",
            SetupSection::Participants => "Select Participants",
        }
    }
}

/// Result of handling a key in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Still open
    Continue,
    /// Closed from the first step
    Cancelled,
    /// Closed from the last step
    Completed(DraftRequest),
    /// Backend refused the request; the dialog stays open
    SubmissionFailed(ScheduleError),
}

pub struct ScheduleWizardDialog {
    pub(crate) wizard: ScheduleWizard,
    pub(crate) team: Vec<TeamMember>,
    pub(crate) section: SetupSection,
    pub(crate) calendar: CalendarState,
    /// False while a complete range is collapsed to its summary
    pub(crate) calendar_open: bool,
    /// Highlight within the selected participants, in display order
    pub(crate) participant_state: ListState,
    /// Add-participant picker; highlight indexes `available_members()`
    pub(crate) picker: Option<ListState>,
    /// Inline validation or info message
    pub(crate) message: Option<String>,
}

impl ScheduleWizardDialog {
    pub fn new(
        candidate_id: CandidateId,
        options: WizardOptions,
        team: Vec<TeamMember>,
        today: NaiveDate,
    ) -> Self {
        Self {
            wizard: ScheduleWizard::new(candidate_id, options),
            team,
            section: SetupSection::InterviewType,
            calendar: CalendarState::new(today),
            calendar_open: true,
            participant_state: ListState::default(),
            picker: None,
            message: None,
        }
    }

    pub fn wizard(&self) -> &ScheduleWizard {
        &self.wizard
    }

    pub fn draft(&self) -> &DraftRequest {
        self.wizard.draft()
    }

    pub fn candidate_id(&self) -> CandidateId {
        self.wizard.candidate_id()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Setup sections in focus order
    pub fn sections(&self) -> Vec<SetupSection> {
        let mut sections = vec![SetupSection::InterviewType, SetupSection::Dates];
        if self.wizard.options().recurring_slots {
            sections.push(SetupSection::Recurring);
        }
        sections.push(SetupSection::Participants);
        sections
    }

    /// Team members not yet in the draft
    pub fn available_members(&self) -> Vec<&TeamMember> {
        let draft = self.wizard.draft();
        self.team
            .iter()
            .filter(|m| !draft.is_selected(m.id))
            .collect()
    }

    /// Selected participants as listed on screen: grouped by role when the
    /// type splits interviewer and observers, insertion order otherwise
    pub fn display_order(&self) -> Vec<&Participant> {
        let draft = self.wizard.draft();
        if draft.interview_type().has_observers() {
            draft.interviewers().chain(draft.observers()).collect()
        } else {
            draft.participants().iter().collect()
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, backend: &dyn SchedulingBackend) -> DialogResult {
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return DialogResult::Continue;
        }

        match key {
            KeyCode::Char('n') => return self.primary(backend),
            KeyCode::Esc => return self.back(),
            _ => {}
        }

        if self.wizard.step() == WizardStep::Setup {
            self.handle_setup_key(key);
        } else if key == KeyCode::Enter {
            return self.primary(backend);
        }
        DialogResult::Continue
    }

    fn primary(&mut self, backend: &dyn SchedulingBackend) -> DialogResult {
        match self.wizard.next(backend) {
            Ok(WizardOutcome::Continue) => {
                self.message = None;
                DialogResult::Continue
            }
            Ok(WizardOutcome::Completed(draft)) => DialogResult::Completed(draft),
            Ok(WizardOutcome::Cancelled) => DialogResult::Cancelled,
            Err(err) => {
                self.message = Some(err.to_string());
                match err {
                    ScheduleError::SubmissionFailed(_) => DialogResult::SubmissionFailed(err),
                    _ => {
                        self.focus_section_for(&err);
                        DialogResult::Continue
                    }
                }
            }
        }
    }

    fn back(&mut self) -> DialogResult {
        match self.wizard.back() {
            WizardOutcome::Cancelled => DialogResult::Cancelled,
            _ => {
                self.message = None;
                DialogResult::Continue
            }
        }
    }

    /// Move focus to the section a validation error points at
    fn focus_section_for(&mut self, err: &ScheduleError) {
        self.section = match err {
            ScheduleError::MissingDate | ScheduleError::IncompleteDateRange => {
                self.calendar_open = true;
                SetupSection::Dates
            }
            _ => SetupSection::Participants,
        };
    }

    fn cycle_section(&mut self, forward: bool) {
        let sections = self.sections();
        let current = sections
            .iter()
            .position(|s| *s == self.section)
            .unwrap_or(0);
        let len = sections.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.section = sections[next];
    }

    fn handle_setup_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => self.cycle_section(true),
            KeyCode::BackTab => self.cycle_section(false),
            KeyCode::Char('a') => {
                self.section = SetupSection::Participants;
                self.open_picker();
            }
            KeyCode::Char('e') => {
                self.section = SetupSection::Dates;
                self.calendar_open = true;
            }
            _ => self.handle_section_key(key),
        }
    }

    fn handle_section_key(&mut self, key: KeyCode) {
        match self.section {
            SetupSection::InterviewType => self.handle_type_key(key),
            SetupSection::Dates => self.handle_dates_key(key),
            SetupSection::Recurring => {
                if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
                    let draft = self.wizard.draft_mut();
                    draft.recurring_slots = !draft.recurring_slots;
                }
            }
            SetupSection::Participants => self.handle_participants_key(key),
        }
    }

    fn handle_type_key(&mut self, key: KeyCode) {
        let types = InterviewType::all();
        let current = self.wizard.draft().interview_type();
        let index = types.iter().position(|t| *t == current).unwrap_or(0);
        let next = match key {
            KeyCode::Left | KeyCode::Char('h') => types[(index + types.len() - 1) % types.len()],
            KeyCode::Right | KeyCode::Char('l') => types[(index + 1) % types.len()],
            _ => return,
        };
        self.set_interview_type(next);
    }

    pub fn set_interview_type(&mut self, interview_type: InterviewType) {
        let dropped = self.wizard.draft_mut().set_interview_type(interview_type);
        self.message = if dropped.is_empty() {
            None
        } else {
            let names: Vec<_> = dropped.iter().map(|p| p.member.name.as_str()).collect();
            Some(format!(
                "Removed {} (a {} interview allows one participant)",
                names.join(", "),
                interview_type.short_label()
            ))
        };
        self.clamp_participant_highlight();
    }

    fn handle_dates_key(&mut self, key: KeyCode) {
        if !self.calendar_open {
            if key == KeyCode::Enter {
                self.calendar_open = true;
            }
            return;
        }

        match key {
            KeyCode::Left | KeyCode::Char('h') => self.calendar.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.calendar.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.calendar.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.calendar.move_days(7),
            KeyCode::PageUp => self.calendar.move_months(-1),
            KeyCode::PageDown => self.calendar.move_months(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.pick_date(self.calendar.cursor()),
            _ => {}
        }
    }

    pub fn pick_date(&mut self, date: NaiveDate) {
        let mode = self.wizard.date_mode();
        self.calendar.set_cursor(date);
        self.wizard.draft_mut().pick_date(date, mode);
        // A finished range collapses to its summary
        if mode == DateMode::Range && self.wizard.draft().dates().is_complete() {
            self.calendar_open = false;
        }
        self.message = None;
    }

    fn handle_participants_key(&mut self, key: KeyCode) {
        let len = self.wizard.draft().participants().len();
        match key {
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                let i = self
                    .participant_state
                    .selected()
                    .map_or(0, |i| (i + 1) % len);
                self.participant_state.select(Some(i));
            }
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                let i = self
                    .participant_state
                    .selected()
                    .map_or(0, |i| (i + len - 1) % len);
                self.participant_state.select(Some(i));
            }
            KeyCode::Enter => self.open_picker(),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                self.remove_highlighted();
            }
            _ => {}
        }
    }

    fn remove_highlighted(&mut self) {
        let Some(id) = self
            .participant_state
            .selected()
            .and_then(|i| self.display_order().get(i).map(|p| p.id()))
        else {
            return;
        };
        if let Some(removed) = self.wizard.draft_mut().remove_participant(id) {
            tracing::debug!(member = removed.id(), "Participant removed");
        }
        self.message = None;
        self.clamp_participant_highlight();
    }

    fn clamp_participant_highlight(&mut self) {
        let len = self.wizard.draft().participants().len();
        let selected = match self.participant_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.participant_state.select(selected);
    }

    fn open_picker(&mut self) {
        if self.available_members().is_empty() {
            self.message = Some("Every team member is already a participant".to_string());
            return;
        }
        let mut state = ListState::default();
        state.select(Some(0));
        self.picker = Some(state);
    }

    fn handle_picker_key(&mut self, key: KeyCode) {
        let len = self.available_members().len();
        let Some(state) = self.picker.as_mut() else {
            return;
        };

        match key {
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                let i = state.selected().map_or(0, |i| (i + 1) % len);
                state.select(Some(i));
            }
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                let i = state.selected().map_or(0, |i| (i + len - 1) % len);
                state.select(Some(i));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let chosen = state.selected();
                self.picker = None;
                if let Some(index) = chosen {
                    self.add_available(index);
                }
            }
            KeyCode::Esc => self.picker = None,
            _ => {}
        }
    }

    /// Add the `index`-th entry of `available_members()`
    fn add_available(&mut self, index: usize) {
        let Some(member) = self.available_members().get(index).map(|m| (*m).clone()) else {
            return;
        };
        match self.wizard.draft_mut().add_participant(member) {
            Ok(_) => {
                self.message = None;
                self.clamp_participant_highlight();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = centered_rect(80, 90, frame.area());
        frame.render_widget(Clear, area);

        let icon = self.wizard.draft().interview_type().icon();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(icon, Style::default().fg(Color::Blue)),
                Span::styled(
                    " AI Schedule Interview ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(2), // Stepper
                Constraint::Min(6),    // Step body
                Constraint::Length(1), // Message
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        self.render_stepper(frame, chunks[0]);

        match self.wizard.step() {
            WizardStep::Setup => self.render_setup_step(frame, chunks[1]),
            WizardStep::Review => self.render_review_step(frame, chunks[1]),
            WizardStep::Confirm => self.render_confirm_step(frame, chunks[1]),
        }

        if let Some(message) = &self.message {
            let line = Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(line, chunks[2]);
        }

        self.render_buttons(frame, chunks[3]);

        if self.picker.is_some() {
            self.render_picker(frame, area);
        }
    }

    fn render_stepper(&self, frame: &mut Frame, area: Rect) {
        let current = self.wizard.step_index();
        let mut spans = Vec::new();
        for (i, step) in self.wizard.steps().iter().enumerate() {
            let style = if i <= current {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("({}) {}", i + 1, step.label()), style));
            if i + 1 < self.wizard.steps().len() {
                let connector = if i < current {
                    Color::Blue
                } else {
                    Color::DarkGray
                };
                spans.push(Span::styled(" ──────── ", Style::default().fg(connector)));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let secondary = Paragraph::new(Span::styled(
            format!(" [Esc] {} ", self.wizard.secondary_label()),
            Style::default().fg(Color::Gray),
        ));
        let primary = Paragraph::new(Span::styled(
            format!(" [n] {} ", self.wizard.primary_label()),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);

        frame.render_widget(secondary, halves[0]);
        frame.render_widget(primary, halves[1]);
    }
}
