use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::ui::keybindings::{shortcuts_by_category_for_context, ShortcutContext};

pub struct HelpDialog {
    pub visible: bool,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    fn context_lines(context: ShortcutContext) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            context.display_name(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        ))];

        for (category, shortcuts) in shortcuts_by_category_for_context(context) {
            lines.push(Line::from(Span::styled(
                format!(" {}", category.display_name()),
                Style::default().fg(Color::DarkGray),
            )));
            for shortcut in shortcuts {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        shortcut.key_display_padded(),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(shortcut.description),
                ]));
            }
        }
        lines.push(Line::from(""));
        lines
    }

    fn render_column(frame: &mut Frame, area: Rect, contexts: &[ShortcutContext]) {
        let lines: Vec<Line> = contexts
            .iter()
            .flat_map(|ctx| Self::context_lines(*ctx))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    pub fn render(&self, frame: &mut Frame) {
        if !self.visible {
            return;
        }

        let area = centered_rect(80, 85, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        Self::render_column(
            frame,
            columns[0],
            &[ShortcutContext::Table, ShortcutContext::Search],
        );
        Self::render_column(
            frame,
            columns[1],
            &[ShortcutContext::ActionMenu, ShortcutContext::Wizard],
        );

        let footer = Paragraph::new(Line::from(Span::styled(
            " Press any key to close",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(footer, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_dialog_toggle() {
        let mut dialog = HelpDialog::new();
        assert!(!dialog.visible);

        dialog.toggle();
        assert!(dialog.visible);

        dialog.toggle();
        assert!(!dialog.visible);
    }

    #[test]
    fn test_context_lines_start_with_header() {
        let lines = HelpDialog::context_lines(ShortcutContext::Wizard);
        assert_eq!(lines[0].spans[0].content, "Schedule Wizard");
        assert!(lines.len() > 5);
    }
}
