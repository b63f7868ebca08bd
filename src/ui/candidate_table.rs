//! Searchable candidate table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tui_textarea::TextArea;

use super::badges::{stage_span, StatusBadge};
use crate::types::{Candidate, RowAction};

pub const EMPTY_MESSAGE: &str = "No candidates found matching your search.";
const SEARCH_PLACEHOLDER: &str = "Find candidates...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFocus {
    Table,
    Search,
}

pub struct CandidateTable {
    candidates: Vec<Candidate>,
    search: TextArea<'static>,
    /// Indices into `candidates` matching the current query
    visible: Vec<usize>,
    pub state: TableState,
    pub focus: TableFocus,
    title: String,
}

impl CandidateTable {
    pub fn new(candidates: Vec<Candidate>, title: String) -> Self {
        let mut search = TextArea::default();
        search.set_placeholder_text(SEARCH_PLACEHOLDER);
        search.set_cursor_line_style(Style::default());

        let mut table = Self {
            candidates,
            search,
            visible: Vec::new(),
            state: TableState::default(),
            focus: TableFocus::Table,
            title,
        };
        table.refilter();
        table
    }

    pub fn query(&self) -> String {
        self.search.lines().join("")
    }

    /// Replace the query text and refilter
    pub fn set_query(&mut self, query: &str) {
        self.search.select_all();
        self.search.cut();
        self.search.insert_str(query);
        self.refilter();
    }

    pub fn clear_search(&mut self) {
        self.set_query("");
    }

    fn refilter(&mut self) {
        let needle = self.query().to_lowercase();
        self.visible = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.matches_lowercase(&needle))
            .map(|(i, _)| i)
            .collect();

        let selected = match self.state.selected() {
            _ if self.visible.is_empty() => None,
            Some(i) => Some(i.min(self.visible.len() - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn visible_candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.visible.iter().map(|&i| &self.candidates[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .map(|&i| &self.candidates[i])
    }

    /// Row action for the highlighted candidate, if it has one
    pub fn selected_action(&self) -> Option<(&Candidate, RowAction)> {
        let candidate = self.selected()?;
        RowAction::for_candidate(candidate).map(|action| (candidate, action))
    }

    pub fn select_next(&mut self) {
        let len = self.visible.len();
        if len > 0 {
            let i = self
                .state
                .selected()
                .map_or(0, |i| if i >= len - 1 { 0 } else { i + 1 });
            self.state.select(Some(i));
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible.len();
        if len > 0 {
            let i = self
                .state
                .selected()
                .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
            self.state.select(Some(i));
        }
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(self.visible.len() - 1));
        }
    }

    pub fn focus_search(&mut self) {
        self.focus = TableFocus::Search;
    }

    pub fn focus_table(&mut self) {
        self.focus = TableFocus::Table;
    }

    /// Handle a key while the search input has focus
    pub fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.focus_table(),
            KeyCode::Esc => {
                self.clear_search();
                self.focus_table();
            }
            // Single-line input: ignore keys that would add lines or scroll
            KeyCode::Up | KeyCode::PageUp | KeyCode::PageDown => {}
            _ => {
                if self.search.input(KeyEvent::new(key, KeyModifiers::NONE)) {
                    self.refilter();
                }
            }
        }
    }

    fn action_cell(candidate: &Candidate) -> Cell<'static> {
        match RowAction::for_candidate(candidate) {
            Some(action) => Cell::from(Span::styled(
                format!("[{} ▾]", action.label()),
                Style::default().fg(Color::Cyan),
            )),
            None => Cell::from(Span::styled("—", Style::default().fg(Color::DarkGray))),
        }
    }

    fn row(candidate: &Candidate) -> Row<'static> {
        let name = Text::from(vec![
            Line::from(Span::styled(
                candidate.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                candidate.email.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ]);

        Row::new(vec![
            Cell::from(name),
            Cell::from(candidate.position.clone()),
            Cell::from(StatusBadge::span(candidate.status)),
            Cell::from(stage_span(candidate.stage)),
            Cell::from(candidate.location.clone()),
            Cell::from(candidate.experience.clone()),
            Self::action_cell(candidate),
        ])
        .height(2)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title(format!(
                " {} ({}/{}) ",
                self.title,
                self.visible.len(),
                self.candidates.len()
            ))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(inner);

        self.render_search(frame, chunks[0], focused);

        if self.visible.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            let mid = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(40), Constraint::Length(1)])
                .split(chunks[1]);
            frame.render_widget(empty, mid[1]);
            return;
        }

        let header = Row::new(vec![
            "CANDIDATE",
            "POSITION",
            "STATUS",
            "STAGE",
            "LOCATION",
            "EXPERIENCE",
            "ACTIONS",
        ])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .map(|&i| Self::row(&self.candidates[i]))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(22),
                Constraint::Percentage(18),
                Constraint::Length(18),
                Constraint::Length(20),
                Constraint::Percentage(14),
                Constraint::Length(11),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .row_highlight_style(if self.focus == TableFocus::Table && focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        })
        .highlight_symbol("> ");

        frame.render_stateful_widget(table, chunks[1], &mut self.state);
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let active = focused && self.focus == TableFocus::Search;
        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        self.search.set_block(
            Block::default()
                .title(" Search [/] ")
                .borders(Borders::ALL)
                .border_style(style),
        );
        self.search.set_cursor_style(if active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        frame.render_widget(&self.search, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Directory, MockDirectory};
    use crate::types::Stage;

    fn table() -> CandidateTable {
        let candidates = MockDirectory::new().list_candidates().unwrap();
        CandidateTable::new(candidates, "Candidate Pipeline".to_string())
    }

    fn type_text(table: &mut CandidateTable, text: &str) {
        table.focus_search();
        for c in text.chars() {
            table.handle_search_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_with_all_candidates_and_first_selected() {
        let table = table();
        assert_eq!(table.visible_count(), 6);
        assert_eq!(table.state.selected(), Some(0));
        assert_eq!(table.query(), "");
    }

    #[test]
    fn test_typing_filters_each_keystroke() {
        let mut table = table();
        type_text(&mut table, "DE");
        let names: Vec<_> = table.visible_candidates().map(|c| c.name.as_str()).collect();
        // "Frontend Developer", "UX Designer", "Backend Developer" match on position
        assert!(names.contains(&"Sarah Johnson"));
        assert!(names.contains(&"Emily Rodriguez"));
        assert!(names.contains(&"David Kim"));

        table.handle_search_key(KeyCode::Char('s'));
        let names: Vec<_> = table.visible_candidates().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Emily Rodriguez"]);
    }

    #[test]
    fn test_backspace_widens_results() {
        let mut table = table();
        type_text(&mut table, "chenx");
        assert_eq!(table.visible_count(), 0);
        assert_eq!(table.state.selected(), None);

        table.handle_search_key(KeyCode::Backspace);
        assert_eq!(table.visible_count(), 1);
        assert_eq!(table.selected().unwrap().name, "Michael Chen");
    }

    #[test]
    fn test_escape_clears_and_returns_to_table() {
        let mut table = table();
        type_text(&mut table, "zzz");
        table.handle_search_key(KeyCode::Esc);
        assert_eq!(table.focus, TableFocus::Table);
        assert_eq!(table.query(), "");
        assert_eq!(table.visible_count(), 6);
    }

    #[test]
    fn test_selection_wraps() {
        let mut table = table();
        table.select_prev();
        assert_eq!(table.state.selected(), Some(5));
        table.select_next();
        assert_eq!(table.state.selected(), Some(0));
        table.select_last();
        assert_eq!(table.selected().unwrap().name, "Alex Thompson");
    }

    #[test]
    fn test_selection_clamped_after_filter() {
        let mut table = table();
        table.select_last();
        table.set_query("e");
        let selected = table.state.selected().unwrap();
        assert!(selected < table.visible_count());
    }

    #[test]
    fn test_selected_action_labels() {
        let mut table = table();
        table.set_query("michael");
        let (_, action) = table.selected_action().unwrap();
        assert_eq!(action, RowAction::Reschedule);

        table.set_query("sarah");
        let (candidate, action) = table.selected_action().unwrap();
        assert_eq!(candidate.id, 1);
        assert_eq!(action, RowAction::Schedule);
    }

    #[test]
    fn test_terminal_stage_has_no_action() {
        let mut candidates = MockDirectory::new().list_candidates().unwrap();
        candidates[0].stage = Stage::Hired;
        let table = CandidateTable::new(candidates, "t".to_string());
        assert!(table.selected().is_some());
        assert!(table.selected_action().is_none());
    }
}
