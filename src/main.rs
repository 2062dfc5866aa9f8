//! Binary entry point: load settings, start logging, then hand the terminal to
//! the menu loop with an empty catalog. Everything is dropped on exit.
use library_catalog::{run_shell, telemetry, Catalog, Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let log_path = telemetry::init(&settings.log)?;
    tracing::info!(log_file = %log_path.display(), "library catalog starting");

    run_shell(Catalog::new(), &settings.shell)?;

    tracing::info!("library catalog exiting");
    Ok(())
}
