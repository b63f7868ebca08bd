//! Per-row scheduling menu and the wizard it opens.

use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::dialogs::centered_fixed;
use super::schedule_wizard::{DialogResult, ScheduleWizardDialog};
use crate::notifications::NotificationEvent;
use crate::scheduling::{SchedulingBackend, WizardOptions};
use crate::types::{Candidate, CandidateId, RowAction, TeamMember};

/// Entries in the row action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Manual = 0,
    Ai = 1,
}

impl MenuItem {
    fn toggle(self) -> Self {
        match self {
            Self::Manual => Self::Ai,
            Self::Ai => Self::Manual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Manual Schedule",
            Self::Ai => "AI Schedule",
        }
    }

    fn key(&self) -> char {
        match self {
            Self::Manual => 'm',
            Self::Ai => 'a',
        }
    }
}

/// Row the menu was opened for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub candidate_id: CandidateId,
    pub name: String,
    pub action: RowAction,
}

pub struct ActionMenu {
    target: Option<MenuTarget>,
    pub selected: MenuItem,
    wizard: Option<ScheduleWizardDialog>,
    options: WizardOptions,
    team: Vec<TeamMember>,
}

impl ActionMenu {
    pub fn new(options: WizardOptions, team: Vec<TeamMember>) -> Self {
        Self {
            target: None,
            selected: MenuItem::Manual,
            wizard: None,
            options,
            team,
        }
    }

    /// Whether the menu or its wizard owns the keyboard
    pub fn is_active(&self) -> bool {
        self.target.is_some() || self.wizard.is_some()
    }

    pub fn target(&self) -> Option<&MenuTarget> {
        self.target.as_ref()
    }

    pub fn wizard(&self) -> Option<&ScheduleWizardDialog> {
        self.wizard.as_ref()
    }

    pub fn is_wizard_open(&self) -> bool {
        self.wizard.is_some()
    }

    pub fn open(&mut self, candidate: &Candidate, action: RowAction) {
        tracing::debug!(candidate = candidate.id, action = action.label(), "Action menu opened");
        self.target = Some(MenuTarget {
            candidate_id: candidate.id,
            name: candidate.name.clone(),
            action,
        });
        self.selected = MenuItem::Manual;
    }

    pub fn close(&mut self) {
        self.target = None;
        self.wizard = None;
    }

    /// Open a fresh wizard for `candidate_id`, replacing any open menu
    pub fn open_wizard(&mut self, candidate_id: CandidateId, today: NaiveDate) -> NotificationEvent {
        self.target = None;
        self.wizard = Some(ScheduleWizardDialog::new(
            candidate_id,
            self.options.clone(),
            self.team.clone(),
            today,
        ));
        tracing::info!(candidate = candidate_id, "AI scheduling started");
        NotificationEvent::AiScheduleStarted { candidate_id }
    }

    /// Route a key to the wizard if open, otherwise to the menu
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        backend: &dyn SchedulingBackend,
        today: NaiveDate,
    ) -> Option<NotificationEvent> {
        if let Some(wizard) = self.wizard.as_mut() {
            let candidate_id = wizard.candidate_id();
            return match wizard.handle_key(key, backend) {
                DialogResult::Continue => None,
                DialogResult::Cancelled | DialogResult::Completed(_) => {
                    self.wizard = None;
                    None
                }
                DialogResult::SubmissionFailed(err) => Some(NotificationEvent::ScheduleFailed {
                    candidate_id,
                    error: err.to_string(),
                }),
            };
        }

        self.target.as_ref()?;
        match key {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.toggle();
                None
            }
            KeyCode::Enter => self.choose(self.selected, today),
            KeyCode::Char('m') => self.choose(MenuItem::Manual, today),
            KeyCode::Char('a') => self.choose(MenuItem::Ai, today),
            KeyCode::Esc => {
                self.target = None;
                None
            }
            _ => None,
        }
    }

    fn choose(&mut self, item: MenuItem, today: NaiveDate) -> Option<NotificationEvent> {
        let target = self.target.take()?;
        match item {
            MenuItem::Manual => {
                tracing::info!(candidate = target.candidate_id, "Manual scheduling requested");
                Some(NotificationEvent::ManualScheduleRequested {
                    candidate_id: target.candidate_id,
                })
            }
            MenuItem::Ai => Some(self.open_wizard(target.candidate_id, today)),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.render(frame);
            return;
        }
        let Some(target) = &self.target else {
            return;
        };

        let area: Rect = centered_fixed(40, 6, frame.area());
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = [MenuItem::Manual, MenuItem::Ai]
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", item.key()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(item.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" {} {} ", target.action.label(), target.name))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected as usize));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
