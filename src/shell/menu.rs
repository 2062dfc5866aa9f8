//! Numbered entries of the main menu and the mapping between what the user
//! types and the command it selects.

/// Entries of the main menu, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    ListBooks,
    ListMembers,
    SearchBooks,
    BorrowBook,
    ReturnBook,
    Exit,
}

impl MenuChoice {
    /// Display order of the menu. Exit is listed last even though its key is 0.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddBook,
        MenuChoice::AddMember,
        MenuChoice::ListBooks,
        MenuChoice::ListMembers,
        MenuChoice::SearchBooks,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::Exit,
    ];

    /// Parse a line typed at the `Enter choice:` prompt. Surrounding
    /// whitespace is ignored; anything that is not one of the listed numbers
    /// yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::AddBook),
            2 => Some(MenuChoice::AddMember),
            3 => Some(MenuChoice::ListBooks),
            4 => Some(MenuChoice::ListMembers),
            5 => Some(MenuChoice::SearchBooks),
            6 => Some(MenuChoice::BorrowBook),
            7 => Some(MenuChoice::ReturnBook),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// The number typed to select this entry.
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::AddBook => 1,
            MenuChoice::AddMember => 2,
            MenuChoice::ListBooks => 3,
            MenuChoice::ListMembers => 4,
            MenuChoice::SearchBooks => 5,
            MenuChoice::BorrowBook => 6,
            MenuChoice::ReturnBook => 7,
            MenuChoice::Exit => 0,
        }
    }

    /// Text shown next to the number in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::AddMember => "Add Member",
            MenuChoice::ListBooks => "List Books",
            MenuChoice::ListMembers => "List Members",
            MenuChoice::SearchBooks => "Search Books",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_parses_back_to_its_entry() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
        }
    }

    #[test]
    fn parse_tolerates_padding() {
        assert_eq!(MenuChoice::parse("  6 \n"), Some(MenuChoice::BorrowBook));
    }

    #[test]
    fn unknown_or_garbled_input_is_rejected() {
        for input in ["8", "-1", "", "one", "1.5", "256"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }
}
