//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for every shortcut in the dashboard. `HelpDialog`
//! renders it; the key handlers in `app.rs` and the widgets match the same
//! keys.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., lowercase variant or arrow key)
    pub alt_key: Option<KeyCode>,
    pub description: &'static str,
    pub category: ShortcutCategory,
    pub context: ShortcutContext,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Actions,
    Editing,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Candidate table has focus
    Table,
    /// Search input has focus
    Search,
    /// Row action menu is open
    ActionMenu,
    /// AI schedule wizard is open
    Wizard,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Actions => "Actions",
            ShortcutCategory::Editing => "Editing",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Actions,
            ShortcutCategory::Editing,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Table => "Candidate Table",
            ShortcutContext::Search => "Search",
            ShortcutContext::ActionMenu => "Action Menu",
            ShortcutContext::Wizard => "Schedule Wizard",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Table,
            ShortcutContext::Search,
            ShortcutContext::ActionMenu,
            ShortcutContext::Wizard,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Tab", "j/↓")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Format key for help dialog (left-padded to 9 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<9}", self.key_display())
    }
}

fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => format!("{key:?}"),
    }
}

const fn shortcut(
    key: KeyCode,
    alt_key: Option<KeyCode>,
    description: &'static str,
    category: ShortcutCategory,
    context: ShortcutContext,
) -> Shortcut {
    Shortcut {
        key,
        alt_key,
        description,
        category,
        context,
    }
}

use ShortcutCategory::{Actions, Editing, General, Navigation};
use ShortcutContext::{ActionMenu, Search, Table, Wizard};

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Table ===
    shortcut(KeyCode::Char('q'), None, "Quit", General, Table),
    shortcut(KeyCode::Char('?'), None, "Toggle help", General, Table),
    shortcut(KeyCode::Char('j'), Some(KeyCode::Down), "Next candidate", Navigation, Table),
    shortcut(KeyCode::Char('k'), Some(KeyCode::Up), "Previous candidate", Navigation, Table),
    shortcut(KeyCode::Char('g'), Some(KeyCode::Home), "First candidate", Navigation, Table),
    shortcut(KeyCode::Char('G'), Some(KeyCode::End), "Last candidate", Navigation, Table),
    shortcut(KeyCode::Char('/'), Some(KeyCode::Tab), "Focus search", Navigation, Table),
    shortcut(KeyCode::Enter, None, "Open row actions", Actions, Table),
    shortcut(KeyCode::Char('m'), None, "Manual schedule", Actions, Table),
    shortcut(KeyCode::Char('s'), None, "AI schedule", Actions, Table),
    shortcut(KeyCode::Esc, None, "Clear search", Actions, Table),
    // === Search ===
    shortcut(KeyCode::Enter, Some(KeyCode::Tab), "Back to table", Navigation, Search),
    shortcut(KeyCode::Down, None, "Back to table", Navigation, Search),
    shortcut(KeyCode::Esc, None, "Clear and leave search", Editing, Search),
    shortcut(KeyCode::Backspace, None, "Delete character", Editing, Search),
    // === Action Menu ===
    shortcut(KeyCode::Char('j'), Some(KeyCode::Down), "Next item", Navigation, ActionMenu),
    shortcut(KeyCode::Char('k'), Some(KeyCode::Up), "Previous item", Navigation, ActionMenu),
    shortcut(KeyCode::Enter, None, "Choose item", Actions, ActionMenu),
    shortcut(KeyCode::Char('m'), None, "Manual Schedule", Actions, ActionMenu),
    shortcut(KeyCode::Char('a'), None, "AI Schedule", Actions, ActionMenu),
    shortcut(KeyCode::Esc, None, "Close menu", Actions, ActionMenu),
    // === Wizard ===
    shortcut(KeyCode::Tab, Some(KeyCode::BackTab), "Next / previous section", Navigation, Wizard),
    shortcut(KeyCode::Left, Some(KeyCode::Right), "Change type / move day", Navigation, Wizard),
    shortcut(KeyCode::Up, Some(KeyCode::Down), "Move week / participant", Navigation, Wizard),
    shortcut(KeyCode::PageUp, Some(KeyCode::PageDown), "Previous / next month", Navigation, Wizard),
    shortcut(KeyCode::Enter, Some(KeyCode::Char(' ')), "Pick day / toggle / add", Editing, Wizard),
    shortcut(KeyCode::Char('e'), None, "Edit dates", Editing, Wizard),
    shortcut(KeyCode::Char('a'), None, "Add participant", Editing, Wizard),
    shortcut(KeyCode::Char('x'), Some(KeyCode::Delete), "Remove participant", Editing, Wizard),
    shortcut(KeyCode::Char('n'), None, "Next / Schedule / Close", Actions, Wizard),
    shortcut(KeyCode::Esc, None, "Back / Cancel", Actions, Wizard),
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = shortcuts_for_context(context)
            .filter(|s| s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}

/// One-line key hint for a context's status bar, e.g. "[Enter] Open row actions"
pub fn hint_line(context: ShortcutContext, category: ShortcutCategory) -> String {
    shortcuts_for_context(context)
        .filter(|s| s.category == category)
        .map(|s| format!("[{}] {}", s.key_display(), s.description))
        .collect::<Vec<_>>()
        .join("  ")
}
