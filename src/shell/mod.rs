//! Text-menu front end. The shell only reads input, calls into
//! [`crate::catalog::Catalog`] and prints what comes back; it holds no
//! library state of its own.

mod app;
mod helpers;
mod menu;
mod prompt;
mod terminal;

pub use app::App;
pub use menu::MenuChoice;
pub use prompt::Prompt;
pub use terminal::run_shell;
