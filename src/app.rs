use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use crate::config::Config;
use crate::directory::Directory;
use crate::notifications::{NotificationEvent, NotificationService};
use crate::scheduling::{SchedulingBackend, SimulatedBackend};
use crate::types::CandidateId;
use crate::ui::{
    install_panic_hook, ActionMenu, HelpDialog, Page, ShortcutContext, TableFocus, TerminalGuard,
    ToastStack,
};

pub struct App {
    config: Config,
    page: Page,
    action_menu: ActionMenu,
    help_dialog: HelpDialog,
    toasts: ToastStack,
    notifier: NotificationService,
    backend: Box<dyn SchedulingBackend>,
    /// Calendar day the wizard opens on; refreshed every tick
    today: NaiveDate,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, directory: &dyn Directory) -> Result<Self> {
        let candidates = directory
            .list_candidates()
            .context("Failed to load candidates")?;
        let team = directory
            .list_team_members()
            .context("Failed to load team members")?;
        tracing::info!(
            source = %directory.source_name(),
            candidates = candidates.len(),
            team = team.len(),
            "Directory loaded"
        );

        let page = Page::new(&config, candidates, directory.source_name());
        let action_menu = ActionMenu::new(config.wizard.clone(), team);
        let toasts = ToastStack::new(Duration::from_millis(config.ui.toast_duration_ms));
        let notifier = NotificationService::from_config(&config);

        Ok(Self {
            config,
            page,
            action_menu,
            help_dialog: HelpDialog::new(),
            toasts,
            notifier,
            backend: Box::new(SimulatedBackend),
            today: Local::now().date_naive(),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let (_guard, mut terminal) = TerminalGuard::enter()?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| {
                let context = self.context();
                self.page.render(f, context);
                self.action_menu.render(f);
                self.help_dialog.render(f);
                self.toasts.render(f);
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            self.toasts.prune();
            self.today = Local::now().date_naive();
        }

        terminal.show_cursor()?;
        Ok(())
    }

    /// Which shortcut context currently owns the keyboard
    fn context(&self) -> ShortcutContext {
        if self.action_menu.is_wizard_open() {
            ShortcutContext::Wizard
        } else if self.action_menu.is_active() {
            ShortcutContext::ActionMenu
        } else if self.page.table.focus == TableFocus::Search {
            ShortcutContext::Search
        } else {
            ShortcutContext::Table
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        // Help dialog takes priority
        if self.help_dialog.visible {
            self.help_dialog.visible = false;
            return;
        }

        if self.action_menu.is_active() {
            if let Some(event) = self
                .action_menu
                .handle_key(key, self.backend.as_ref(), self.today)
            {
                self.emit(event);
            }
            return;
        }

        if self.page.table.focus == TableFocus::Search {
            self.page.table.handle_search_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.help_dialog.toggle();
            }
            KeyCode::Down | KeyCode::Char('j') => self.page.table.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.page.table.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.page.table.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.page.table.select_last(),
            KeyCode::Char('/') | KeyCode::Tab => self.page.table.focus_search(),
            KeyCode::Esc => self.page.table.clear_search(),
            KeyCode::Enter => {
                if let Some((candidate, action)) = self.page.table.selected_action() {
                    self.action_menu.open(candidate, action);
                }
            }
            KeyCode::Char('m') => {
                if let Some((candidate, _)) = self.page.table.selected_action() {
                    let event = NotificationEvent::ManualScheduleRequested {
                        candidate_id: candidate.id,
                    };
                    self.emit(event);
                }
            }
            KeyCode::Char('s') => {
                if let Some(candidate_id) = self.selected_schedulable() {
                    let event = self.action_menu.open_wizard(candidate_id, self.today);
                    self.emit(event);
                }
            }
            _ => {}
        }
    }

    /// Highlighted candidate, if its stage still allows scheduling
    fn selected_schedulable(&self) -> Option<CandidateId> {
        self.page
            .table
            .selected_action()
            .map(|(candidate, _)| candidate.id)
    }

    /// Show an event as a toast and mirror it to the desktop integrations
    fn emit(&mut self, event: NotificationEvent) {
        tracing::debug!(event = %event.event_type(), "Dashboard event");
        if self.notifier.is_enabled() {
            self.toasts.push(&event);
        }
        self.notifier.notify(&event);
    }
}
