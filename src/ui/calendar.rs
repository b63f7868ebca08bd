//! Keyboard-driven month calendar for picking interview days.

use chrono::{Datelike, Days, Months, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::scheduling::DateSelection;

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Cursor position plus the day it was opened on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    cursor: NaiveDate,
    today: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            today,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn set_cursor(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    /// Move the cursor by whole days (negative moves back)
    pub fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Move the cursor by whole months, clamping the day to the month's end
    pub fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor
                .checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Title such as "October 2026"
    pub fn month_title(&self) -> String {
        self.cursor.format("%B %Y").to_string()
    }

    /// Weeks of the cursor's month, Sunday first, padded with `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.cursor.with_day(1) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = offset;
        let mut day = Some(first);

        while let Some(date) = day.filter(|d| d.month() == first.month()) {
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day = date.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Rows needed to draw the current month (title + header + weeks)
    pub fn height(&self) -> u16 {
        self.weeks().len() as u16 + 2
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, selection: DateSelection, focused: bool) {
        let title_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("‹ {} ›", self.month_title()),
                title_style,
            )),
            Line::from(
                WEEKDAY_HEADER
                    .iter()
                    .map(|d| Span::styled(format!(" {d} "), Style::default().fg(Color::DarkGray)))
                    .collect::<Vec<_>>(),
            ),
        ];

        for week in self.weeks() {
            let spans: Vec<Span> = week
                .iter()
                .map(|slot| match slot {
                    None => Span::raw("    "),
                    Some(date) => Span::styled(
                        format!(" {:>2} ", date.day()),
                        self.day_style(*date, selection, focused),
                    ),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
    }

    fn day_style(&self, date: NaiveDate, selection: DateSelection, focused: bool) -> Style {
        let mut style = Style::default();
        if selection.contains(date) {
            style = style.fg(Color::White).bg(Color::Blue);
        } else if date == self.today {
            style = style.fg(Color::Yellow);
        }
        if focused && date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        style
    }
}
