use std::io;

use anyhow::Result;
use crossterm::tty::IsTty;

use crate::catalog::Catalog;
use crate::settings::ShellSettings;

use super::app::App;

/// Bind the menu loop to the process's stdin/stdout and run it until the user
/// exits. Color is only used when stdout is an actual terminal.
pub fn run_shell(catalog: Catalog, settings: &ShellSettings) -> Result<()> {
    let stdout = io::stdout();
    let color = settings.color && stdout.is_tty();

    let mut app = App::new(catalog, io::stdin().lock(), stdout.lock(), color);
    app.run()
}
