//! Business outcomes the catalog reports back to its caller. None of these are
//! fatal: the shell prints the message and carries on, so each `Display`
//! string is exactly the text the user sees.

use thiserror::Error;

use crate::models::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Either the book or the member (or both) does not exist.
    #[error("Invalid book or member ID!")]
    InvalidReference {
        book_id: RecordId,
        member_id: RecordId,
    },

    #[error("No available copies for {title}")]
    NoCopiesAvailable { title: String },

    #[error("This book was not borrowed.")]
    NothingToReturn { title: String },

    /// The id sequence for `kind` has no values left.
    #[error("No more {kind} ids are available.")]
    IdsExhausted { kind: &'static str },
}
