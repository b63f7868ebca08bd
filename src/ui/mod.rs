pub mod action_menu;
pub mod badges;
pub mod calendar;
pub mod candidate_table;
pub mod dialogs;
pub mod keybindings;
pub mod page;
pub mod schedule_wizard;
pub mod terminal_guard;
pub mod toast;

pub use action_menu::ActionMenu;
pub use candidate_table::{CandidateTable, TableFocus};
pub use dialogs::HelpDialog;
pub use keybindings::ShortcutContext;
pub use page::Page;
pub use schedule_wizard::ScheduleWizardDialog;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use toast::ToastStack;
