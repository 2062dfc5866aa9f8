//! Domain records kept by the catalog. Books and members stay plain data
//! holders; the only mutation either of them supports is moving a copy of a
//! book in or out on loan, and that is guarded so the counters can never
//! drift outside their valid range.

use std::fmt;

use crate::error::CatalogError;

/// Identifier handed out to books and members. Each entity type draws from
/// its own sequence, so a book and a member may share the same value.
pub type RecordId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A title held by the library together with its copy counters.
pub struct Book {
    /// Assigned by the catalog when the book is added.
    id: RecordId,
    /// Title shown in listings and matched by search.
    title: String,
    /// Author shown in listings and matched by search.
    author: String,
    /// Fixed when the book is added.
    total_copies: u32,
    /// Always within `0..=total_copies`.
    borrowed: u32,
}

impl Book {
    /// Build a book with no copies on loan. Only the catalog creates books, so
    /// ids always come from its sequence.
    pub(crate) fn new(id: RecordId, title: &str, author: &str, total_copies: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            total_copies,
            borrowed: 0,
        }
    }

    /// Catalog-assigned id, unique among books.
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Copies the library owns, on the shelf or not.
    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    /// Copies currently out on loan.
    pub fn borrowed(&self) -> u32 {
        self.borrowed
    }

    /// Copies currently on the shelf.
    pub fn available(&self) -> u32 {
        self.total_copies - self.borrowed
    }

    /// Lend one copy out. Fails without touching the counters when every copy
    /// is already on loan.
    pub fn borrow(&mut self) -> Result<(), CatalogError> {
        if self.borrowed < self.total_copies {
            self.borrowed += 1;
            Ok(())
        } else {
            Err(CatalogError::NoCopiesAvailable {
                title: self.title.clone(),
            })
        }
    }

    /// Take one copy back. Only the count is tracked, so any copy on loan can
    /// be returned regardless of who took it.
    pub fn return_copy(&mut self) -> Result<(), CatalogError> {
        if self.borrowed > 0 {
            self.borrowed -= 1;
            Ok(())
        } else {
            Err(CatalogError::NothingToReturn {
                title: self.title.clone(),
            })
        }
    }
}

impl fmt::Display for Book {
    /// `[id] Title by Author (Available: n/total)`, the line printed by every
    /// listing and search in the shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {} (Available: {}/{})",
            self.id,
            self.title,
            self.author,
            self.available(),
            self.total_copies
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registered library member. Members never change after registration.
pub struct Member {
    /// Assigned by the catalog at registration.
    id: RecordId,
    /// Display name, also used to word loan receipts.
    name: String,
}

impl Member {
    /// Only the catalog registers members.
    pub(crate) fn new(id: RecordId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    /// Catalog-assigned id, unique among members.
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Member {
    /// `[id] Name`, as printed by the member listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)
    }
}
