//! The interactive menu loop. Each menu entry maps to one handler that reads
//! its fields through [`Prompt`], calls the catalog and prints one status line.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::RecordId;

use super::helpers::StatusKind;
use super::menu::MenuChoice;
use super::prompt::Prompt;

const MENU_TITLE: &str = "===== Library Management System =====";
/// Ids are handed out from 1, so no record ever carries 0.
const UNASSIGNED_ID: RecordId = 0;

fn to_record_id(raw: i64) -> RecordId {
    RecordId::try_from(raw).unwrap_or(UNASSIGNED_ID)
}

/// Whether the loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The menu loop: owns the catalog for the lifetime of the session and talks
/// to the user through a [`Prompt`].
pub struct App<R, W> {
    catalog: Catalog,
    prompt: Prompt<R, W>,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Wrap `catalog` in a session reading from `input` and printing to
    /// `output`. `color` turns on ANSI coloring of status lines.
    pub fn new(catalog: Catalog, input: R, output: W, color: bool) -> Self {
        Self {
            catalog,
            prompt: Prompt::new(input, output),
            color,
        }
    }

    /// Show the menu and dispatch choices until the user exits or input runs
    /// out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_menu()?;
            let Some(answer) = self.prompt.line("Enter choice: ")? else {
                self.input_closed()?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    self.status(StatusKind::Error, "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Tear the app down, handing back the catalog and the output sink.
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.prompt.into_output())
    }

    fn render_menu(&mut self) -> Result<()> {
        self.prompt.say("")?;
        self.prompt.say(MENU_TITLE)?;
        for choice in MenuChoice::ALL {
            self.prompt
                .say(&format!("{}. {}", choice.key(), choice.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::AddMember => self.add_member(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::ListMembers => self.list_members(),
            MenuChoice::SearchBooks => self.search_books(),
            MenuChoice::BorrowBook => self.borrow_book(),
            MenuChoice::ReturnBook => self.return_book(),
            MenuChoice::Exit => {
                self.prompt.say("Exiting...")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt.line("Enter book title: ")? else {
            return self.input_closed();
        };
        let Some(author) = self.prompt.line("Enter book author: ")? else {
            return self.input_closed();
        };
        let Some(copies) = self.prompt.count("Enter number of copies: ")? else {
            return self.input_closed();
        };

        let outcome = self
            .catalog
            .add_book(&title, &author, copies)
            .map(|book| format!("Added: {book}"));
        match outcome {
            Ok(added) => self.status(StatusKind::Info, &added)?,
            Err(err) => self.status(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn add_member(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt.line("Enter member name: ")? else {
            return self.input_closed();
        };

        let outcome = self
            .catalog
            .add_member(&name)
            .map(|member| format!("Added: {member}"));
        match outcome {
            Ok(added) => self.status(StatusKind::Info, &added)?,
            Err(err) => self.status(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        self.prompt.say("\nBooks:")?;
        for book in self.catalog.list_books() {
            self.prompt.say(&book.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn list_members(&mut self) -> Result<Flow> {
        self.prompt.say("\nMembers:")?;
        for member in self.catalog.list_members() {
            self.prompt.say(&member.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        let Some(keyword) = self.prompt.line("Enter keyword: ")? else {
            return self.input_closed();
        };

        self.prompt.say("Search Results:")?;
        for book in self.catalog.search_books(&keyword) {
            self.prompt.say(&book.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn borrow_book(&mut self) -> Result<Flow> {
        let Some((book_id, member_id)) = self.read_loan_ids()? else {
            return self.input_closed();
        };

        match self.catalog.borrow_book(book_id, member_id) {
            Ok(receipt) => self.status(StatusKind::Info, &receipt.to_string())?,
            Err(err) => self.status(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> Result<Flow> {
        let Some((book_id, member_id)) = self.read_loan_ids()? else {
            return self.input_closed();
        };

        match self.catalog.return_book(book_id, member_id) {
            Ok(receipt) => self.status(StatusKind::Info, &receipt.to_string())?,
            Err(err) => self.status(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Read the book and member ids for a loan. Any integer is accepted here;
    /// values no record can carry become [`UNASSIGNED_ID`] so the catalog
    /// reports them as unknown.
    fn read_loan_ids(&mut self) -> Result<Option<(RecordId, RecordId)>> {
        let Some(book_id) = self.prompt.integer("Enter book ID: ")? else {
            return Ok(None);
        };
        let Some(member_id) = self.prompt.integer("Enter member ID: ")? else {
            return Ok(None);
        };
        Ok(Some((to_record_id(book_id), to_record_id(member_id))))
    }

    /// Input ended halfway through a command; drop it and leave the loop.
    fn input_closed(&mut self) -> Result<Flow> {
        debug!("input closed mid-command");
        self.prompt.say("")?;
        self.prompt.say("Exiting...")?;
        Ok(Flow::Quit)
    }

    fn status(&mut self, kind: StatusKind, text: &str) -> Result<()> {
        let painted = kind.paint(text, self.color);
        self.prompt.say(&painted)
    }
}
