//! Setup step rendering: type cards, date picker, recurring switch,
//! participants and the add-participant picker.

use crate::scheduling::{DateMode, InterviewType, ParticipantRole};
use crate::ui::badges::availability_span;
use crate::ui::dialogs::centered_fixed;
use crate::ui::schedule_wizard::{ScheduleWizardDialog, SetupSection};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

fn section_title(section: SetupSection, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(Span::styled(format!("{marker}{}", section.title()), style))
}

impl ScheduleWizardDialog {
    pub(crate) fn render_setup_step(&self, frame: &mut Frame, area: Rect) {
        let dates_height = if self.calendar_open {
            self.calendar.height() + 2
        } else {
            3
        };

        let mut constraints = vec![
            Constraint::Length(5),            // Interview type cards
            Constraint::Length(dates_height), // Date picker
        ];
        if self.wizard.options().recurring_slots {
            constraints.push(Constraint::Length(2));
        }
        constraints.push(Constraint::Min(4)); // Participants

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_type_cards(frame, chunks[0]);
        self.render_dates(frame, chunks[1]);
        let mut next = 2;
        if self.wizard.options().recurring_slots {
            self.render_recurring(frame, chunks[next]);
            next += 1;
        }
        self.render_participants(frame, chunks[next]);
    }

    fn render_type_cards(&self, frame: &mut Frame, area: Rect) {
        let focused = self.section == SetupSection::InterviewType;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(4)])
            .split(area);
        frame.render_widget(
            Paragraph::new(section_title(SetupSection::InterviewType, focused)),
            rows[0],
        );

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        let current = self.wizard.draft().interview_type();
        for (i, interview_type) in InterviewType::all().iter().enumerate() {
            let selected = *interview_type == current;
            let border = if selected {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_style = if selected {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    interview_type.icon(),
                    Style::default().fg(Color::Blue),
                )),
                Line::from(Span::styled(interview_type.label(), label_style)),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
            frame.render_widget(card, cards[i]);
        }
    }

    fn render_dates(&self, frame: &mut Frame, area: Rect) {
        let focused = self.section == SetupSection::Dates;
        let dates = self.wizard.draft().dates();
        let mut title = section_title(SetupSection::Dates, focused);
        if self.wizard.date_mode() == DateMode::Range {
            title.push_span(Span::styled(" (range)", Style::default().fg(Color::DarkGray)));
        }

        if !self.calendar_open {
            let summary = dates.summary().unwrap_or_default();
            let lines = vec![
                title,
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(summary, Style::default().fg(Color::Blue)),
                    Span::styled("  [e] Edit", Style::default().fg(Color::Yellow)),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);
        frame.render_widget(Paragraph::new(title), rows[0]);

        let inset = Rect {
            x: rows[1].x + 2,
            width: rows[1].width.saturating_sub(2),
            ..rows[1]
        };
        self.calendar.render(frame, inset, dates, focused);

        let hint = match dates.summary() {
            Some(summary) => Line::from(vec![
                Span::raw("  "),
                Span::styled(summary, Style::default().fg(Color::Blue)),
            ]),
            None => Line::from(Span::styled(
                "  No date selected",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(hint), rows[2]);
    }

    fn render_recurring(&self, frame: &mut Frame, area: Rect) {
        let focused = self.section == SetupSection::Recurring;
        let on = self.wizard.draft().recurring_slots;
        let switch = if on {
            Span::styled("[━━●]", Style::default().fg(Color::Green))
        } else {
            Span::styled("[●━━]", Style::default().fg(Color::DarkGray))
        };
        let line = Line::from(vec![
            Span::raw(if focused { "▸ " } else { "  " }),
            switch,
            Span::raw(" "),
            Span::styled(
                SetupSection::Recurring.title(),
                if focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn participant_item(name: &str, initials: &str, role: ParticipantRole) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(
                format!("({initials}) "),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(name.to_string()),
            Span::styled(
                format!("  {}", role.label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("  ×", Style::default().fg(Color::Red)),
        ]))
    }

    fn render_participants(&self, frame: &mut Frame, area: Rect) {
        let focused = self.section == SetupSection::Participants;
        let draft = self.wizard.draft();
        let grouped = draft.interview_type().has_observers();

        let mut items: Vec<ListItem> = Vec::new();
        let mut headers = 0usize;
        let mut last_role = None;
        for p in self.display_order() {
            if grouped && last_role != Some(p.role) {
                let heading = match p.role {
                    ParticipantRole::Interviewer => "Interviewer",
                    ParticipantRole::Observer => "Observers",
                };
                items.push(ListItem::new(Span::styled(
                    heading,
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )));
                headers += 1;
                last_role = Some(p.role);
            }
            items.push(Self::participant_item(
                &p.member.name,
                &p.member.initials(),
                p.role,
            ));
        }

        let availability = draft.availability();
        let footer_height = 1 + u16::from(availability.is_some());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(footer_height),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(section_title(SetupSection::Participants, focused)),
            rows[0],
        );

        // Headings are interleaved with participants, so map the highlight
        // from participant order to list row order
        let mut list_state = self.participant_state.clone();
        if grouped {
            if let Some(i) = list_state.selected() {
                let interviewers = draft.interviewers().count();
                let offset = if i < interviewers { 1 } else { headers };
                list_state.select(Some(i + offset));
            }
        }
        if !focused {
            list_state.select(None);
        }

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("  ");
        let list_area = Rect {
            x: rows[1].x + 2,
            width: rows[1].width.saturating_sub(2),
            ..rows[1]
        };
        frame.render_stateful_widget(list, list_area, &mut list_state);

        let mut footer = Vec::new();
        if let Some(status) = availability {
            footer.push(Line::from(vec![Span::raw("  "), availability_span(status)]));
        }
        footer.push(Line::from(Span::styled(
            "  [a] + Add Participant",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(Paragraph::new(footer), rows[2]);
    }

    pub(crate) fn render_picker(&self, frame: &mut Frame, dialog_area: Rect) {
        let Some(mut state) = self.picker.clone() else {
            return;
        };
        let members = self.available_members();
        let height = members.len() as u16 * 2 + 2;
        let area = centered_fixed(56, height, dialog_area);
        frame.render_widget(Clear, area);

        let role = self.wizard.draft().next_role();
        let items: Vec<ListItem> = members
            .iter()
            .map(|m| {
                let availability = if m.available {
                    Span::styled("● available", Style::default().fg(Color::Green))
                } else {
                    Span::styled("● busy", Style::default().fg(Color::Red))
                };
                let calendar = if m.calendar_access {
                    ""
                } else {
                    "  (no calendar access)"
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("({}) ", m.initials()),
                            Style::default().fg(Color::Blue),
                        ),
                        Span::styled(
                            m.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        availability,
                    ]),
                    Line::from(Span::styled(
                        format!("     {}{calendar}", m.designation),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Add Participant as {} ", role.label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
