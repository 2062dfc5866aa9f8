//! Core library surface for the in-memory library catalog.
//!
//! The catalog service and its records live here so the `bin` target and the
//! integration tests drive exactly the same code. The shell is a thin layer on
//! top: it parses menu input, calls the catalog and prints the results.
pub mod catalog;
pub mod error;
pub mod models;
pub mod settings;
pub mod shell;
pub mod telemetry;

/// The service and the receipts it hands back for loans.
pub use catalog::{Catalog, LoanAction, LoanReceipt};

/// Failures the catalog reports to its caller.
pub use error::CatalogError;

/// The two record types the catalog manages.
pub use models::{Book, Member, RecordId};

pub use settings::Settings;

/// The interactive menu loop.
pub use shell::{run_shell, App};
