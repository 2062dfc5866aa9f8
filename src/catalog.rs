//! The record-keeping service behind the menu. `Catalog` owns every book and
//! member, hands out ids from its own counters, and is the only place where
//! loan counters change. Lookups are plain linear scans; the collections are
//! small and kept in insertion order so listings read back the way they were
//! entered.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::models::{Book, Member, RecordId};

/// Which way a copy moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanAction {
    Borrowed,
    Returned,
}

impl fmt::Display for LoanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanAction::Borrowed => f.write_str("borrowed"),
            LoanAction::Returned => f.write_str("returned"),
        }
    }
}

/// Confirmation of a successful borrow or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub action: LoanAction,
    /// Name of the member given at the prompt.
    pub member_name: String,
    /// Title of the book that moved.
    pub title: String,
    /// Copies left on the shelf after the operation.
    pub available: u32,
}

impl fmt::Display for LoanReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.member_name, self.action, self.title)
    }
}

/// Hand out the current value of `counter` and advance it. The last value of
/// the id type is never handed out, so the counter itself cannot overflow.
fn allocate_id(counter: &mut RecordId, kind: &'static str) -> Result<RecordId, CatalogError> {
    let id = *counter;
    match id.checked_add(1) {
        Some(next) => {
            *counter = next;
            Ok(id)
        }
        None => {
            warn!(kind, "id sequence exhausted");
            Err(CatalogError::IdsExhausted { kind })
        }
    }
}

/// In-memory catalog of books and members.
#[derive(Debug)]
pub struct Catalog {
    /// Insertion order is the listing order.
    books: Vec<Book>,
    members: Vec<Member>,
    /// Id the next added book receives.
    next_book_id: RecordId,
    /// Id the next registered member receives; independent of book ids.
    next_member_id: RecordId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// An empty catalog whose book and member ids both start at 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            members: Vec::new(),
            next_book_id: 1,
            next_member_id: 1,
        }
    }

    /// Register a new title with every copy on the shelf and return the
    /// stored record. Fails only once the book id sequence is used up.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        copies: u32,
    ) -> Result<&Book, CatalogError> {
        let id = allocate_id(&mut self.next_book_id, "book")?;

        info!(book_id = id, title, author, copies, "book added");
        self.books.push(Book::new(id, title, author, copies));
        Ok(&self.books[self.books.len() - 1])
    }

    /// Register a member under the next member id and return the stored
    /// record.
    pub fn add_member(&mut self, name: &str) -> Result<&Member, CatalogError> {
        let id = allocate_id(&mut self.next_member_id, "member")?;

        info!(member_id = id, name, "member added");
        self.members.push(Member::new(id, name));
        Ok(&self.members[self.members.len() - 1])
    }

    /// Every book in the order it was added.
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Every member in the order they registered.
    pub fn list_members(&self) -> &[Member] {
        &self.members
    }

    /// Case-insensitive substring match against title or author. An empty
    /// keyword matches everything.
    pub fn search_books(&self, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        let matches: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| {
                book.title().to_lowercase().contains(&needle)
                    || book.author().to_lowercase().contains(&needle)
            })
            .collect();

        debug!(keyword, hits = matches.len(), "searched books");
        matches
    }

    /// The book carrying `id`, if any.
    pub fn find_book_by_id(&self, id: RecordId) -> Option<&Book> {
        let found = self.books.iter().find(|book| book.id() == id);
        if found.is_none() {
            debug!(book_id = id, "book lookup missed");
        }
        found
    }

    /// The member carrying `id`, if any.
    pub fn find_member_by_id(&self, id: RecordId) -> Option<&Member> {
        let found = self.members.iter().find(|member| member.id() == id);
        if found.is_none() {
            debug!(member_id = id, "member lookup missed");
        }
        found
    }

    /// Lend one copy of `book_id` to `member_id`. The member is only used to
    /// word the receipt; no per-member loan record is kept.
    pub fn borrow_book(
        &mut self,
        book_id: RecordId,
        member_id: RecordId,
    ) -> Result<LoanReceipt, CatalogError> {
        self.apply_loan(book_id, member_id, LoanAction::Borrowed)
    }

    /// Take one copy of `book_id` back. Any member may return any book that
    /// has copies out.
    pub fn return_book(
        &mut self,
        book_id: RecordId,
        member_id: RecordId,
    ) -> Result<LoanReceipt, CatalogError> {
        self.apply_loan(book_id, member_id, LoanAction::Returned)
    }

    fn apply_loan(
        &mut self,
        book_id: RecordId,
        member_id: RecordId,
        action: LoanAction,
    ) -> Result<LoanReceipt, CatalogError> {
        let member_name = self
            .find_member_by_id(member_id)
            .map(|member| member.name().to_string());
        let book = self.books.iter_mut().find(|book| book.id() == book_id);

        let (book, member_name) = match (book, member_name) {
            (Some(book), Some(name)) => (book, name),
            _ => {
                warn!(book_id, member_id, %action, "loan rejected: unknown book or member");
                return Err(CatalogError::InvalidReference { book_id, member_id });
            }
        };

        let outcome = match action {
            LoanAction::Borrowed => book.borrow(),
            LoanAction::Returned => book.return_copy(),
        };
        if let Err(err) = outcome {
            warn!(book_id, member_id, %action, reason = %err, "loan rejected");
            return Err(err);
        }

        info!(
            book_id,
            member_id,
            %action,
            available = book.available(),
            "loan recorded"
        );
        Ok(LoanReceipt {
            action,
            member_name,
            title: book.title().to_string(),
            available: book.available(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune", "Frank Herbert", 2).unwrap();
        catalog.add_book("Emma", "Jane Austen", 1).unwrap();
        catalog.add_book("Children of Dune", "Frank Herbert", 1).unwrap();
        catalog.add_member("Ada").unwrap();
        catalog
    }

    #[test]
    fn ids_start_at_one_and_are_independent_per_kind() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add_book("Dune", "Herbert", 2).unwrap().id(), 1);
        assert_eq!(catalog.add_member("Ada").unwrap().id(), 1);
        assert_eq!(catalog.add_member("Linus").unwrap().id(), 2);
        assert_eq!(catalog.add_book("Emma", "Austen", 1).unwrap().id(), 2);
    }

    #[test]
    fn exhausted_id_sequence_is_reported_instead_of_wrapping() {
        let mut catalog = Catalog::new();
        catalog.next_book_id = RecordId::MAX - 1;

        assert_eq!(catalog.add_book("Last", "Author", 1).unwrap().id(), RecordId::MAX - 1);
        let err = catalog.add_book("One too many", "Author", 1).unwrap_err();
        assert_eq!(err, CatalogError::IdsExhausted { kind: "book" });
        assert_eq!(err.to_string(), "No more book ids are available.");
        assert_eq!(catalog.list_books().len(), 1);

        assert_eq!(catalog.add_member("Ada").unwrap().id(), 1);
    }

    #[test]
    fn separate_catalogs_do_not_share_counters() {
        let mut first = Catalog::new();
        first.add_book("Dune", "Herbert", 1).unwrap();
        first.add_book("Emma", "Austen", 1).unwrap();

        let mut second = Catalog::new();
        assert_eq!(second.add_book("Ulysses", "Joyce", 1).unwrap().id(), 1);
    }

    #[test]
    fn listings_keep_insertion_order() {
        let catalog = seeded();
        let titles: Vec<&str> = catalog.list_books().iter().map(Book::title).collect();
        assert_eq!(titles, ["Dune", "Emma", "Children of Dune"]);
        assert_eq!(catalog.list_members().len(), 1);
    }

    #[test]
    fn empty_keyword_matches_every_book() {
        let catalog = seeded();
        assert_eq!(catalog.search_books("").len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_on_title_or_author() {
        let catalog = seeded();

        let by_title: Vec<RecordId> = catalog.search_books("DUNE").iter().map(|b| b.id()).collect();
        assert_eq!(by_title, [1, 3]);

        let by_author: Vec<RecordId> =
            catalog.search_books("austen").iter().map(|b| b.id()).collect();
        assert_eq!(by_author, [2]);

        assert!(catalog.search_books("tolkien").is_empty());
    }

    #[test]
    fn lookups_miss_without_panicking() {
        assert!(Catalog::new().find_book_by_id(999).is_none());
        let catalog = seeded();
        assert!(catalog.find_book_by_id(999).is_none());
        assert!(catalog.find_member_by_id(2).is_none());
        assert_eq!(catalog.find_book_by_id(2).map(Book::title), Some("Emma"));
    }

    #[test]
    fn dune_runs_out_after_two_loans() {
        let mut catalog = Catalog::new();
        let book_id = catalog.add_book("Dune", "Herbert", 2).unwrap().id();
        let member_id = catalog.add_member("Ada").unwrap().id();

        let first = catalog.borrow_book(book_id, member_id).unwrap();
        assert_eq!(first.to_string(), "Ada borrowed Dune");
        assert_eq!(first.available, 1);
        catalog.borrow_book(book_id, member_id).unwrap();

        let err = catalog.borrow_book(book_id, member_id).unwrap_err();
        assert_eq!(err.to_string(), "No available copies for Dune");
        assert_eq!(
            catalog.find_book_by_id(book_id).unwrap().to_string(),
            "[1] Dune by Herbert (Available: 0/2)"
        );
    }

    #[test]
    fn returning_a_fresh_book_reports_nothing_to_return() {
        let mut catalog = seeded();
        let err = catalog.return_book(2, 1).unwrap_err();
        assert_eq!(err.to_string(), "This book was not borrowed.");
        assert_eq!(catalog.find_book_by_id(2).unwrap().borrowed(), 0);
    }

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut catalog = seeded();

        let err = catalog.borrow_book(1, 42).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidReference {
                book_id: 1,
                member_id: 42
            }
        );
        assert!(catalog.borrow_book(42, 1).is_err());
        assert!(catalog.return_book(42, 42).is_err());
        assert_eq!(catalog.find_book_by_id(1).unwrap().borrowed(), 0);
    }

    #[test]
    fn any_member_can_return_a_borrowed_copy() {
        let mut catalog = seeded();
        let linus = catalog.add_member("Linus").unwrap().id();

        catalog.borrow_book(2, 1).unwrap();
        let receipt = catalog.return_book(2, linus).unwrap();
        assert_eq!(receipt.action, LoanAction::Returned);
        assert_eq!(receipt.to_string(), "Linus returned Emma");
        assert_eq!(receipt.available, 1);
    }
}
