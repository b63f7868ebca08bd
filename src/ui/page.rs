use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::candidate_table::CandidateTable;
use super::keybindings::{hint_line, ShortcutCategory, ShortcutContext};
use crate::config::Config;
use crate::types::Candidate;

const SUBTITLE: &str = "Manage your candidate pipeline";

/// Top-level screen: header, candidate table and status bar
pub struct Page {
    pub table: CandidateTable,
    title: String,
    source: String,
}

impl Page {
    pub fn new(config: &Config, candidates: Vec<Candidate>, source: String) -> Self {
        Self {
            table: CandidateTable::new(candidates, config.ui.table_title.clone()),
            title: config.ui.page_title.clone(),
            source,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Status bar text for whichever context owns the keyboard
    pub fn status_hint(context: ShortcutContext) -> String {
        match context {
            ShortcutContext::Table => format!(
                "{}  {}",
                hint_line(context, ShortcutCategory::Actions),
                hint_line(context, ShortcutCategory::General)
            ),
            ShortcutContext::Search => hint_line(context, ShortcutCategory::Editing),
            ShortcutContext::ActionMenu | ShortcutContext::Wizard => {
                hint_line(context, ShortcutCategory::Actions)
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, context: ShortcutContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Table
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        let table_focused = matches!(context, ShortcutContext::Table | ShortcutContext::Search);
        self.table.render(frame, chunks[1], table_focused);

        self.render_status(frame, chunks[2], context);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", self.title),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
                Span::styled(self.source.as_str(), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                format!(" {SUBTITLE}"),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, context: ShortcutContext) {
        let count = Span::styled(
            format!(
                " {}/{} candidates",
                self.table.visible_count(),
                self.table.total()
            ),
            Style::default().fg(Color::Gray),
        );
        let help = Span::styled(
            format!("  {}", Self::status_hint(context)),
            Style::default().fg(Color::DarkGray),
        );
        let bar = Paragraph::new(Line::from(vec![count, help]))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Directory, MockDirectory};

    #[test]
    fn test_page_uses_configured_titles() {
        let mut config = Config::default();
        config.ui.page_title = "Pipeline".to_string();
        let candidates = MockDirectory::new().list_candidates().unwrap();
        let page = Page::new(&config, candidates, "built-in".to_string());
        assert_eq!(page.title(), "Pipeline");
        assert_eq!(page.table.total(), 6);
    }

    #[test]
    fn test_status_hint_per_context() {
        let table = Page::status_hint(ShortcutContext::Table);
        assert!(table.contains("[Enter] Open row actions"));
        assert!(table.contains("[q] Quit"));

        let search = Page::status_hint(ShortcutContext::Search);
        assert!(search.contains("Clear and leave search"));

        let wizard = Page::status_hint(ShortcutContext::Wizard);
        assert!(wizard.contains("[n] Next / Schedule / Close"));
    }
}
