//! The [`BookRegistry`] trait and the default [`UsfmBooks`] implementation.
//!
//! A registry answers two questions about a book code: is it known, and
//! which canon does it belong to. The reference parser only ever talks to
//! the trait, so callers with a restricted or extended book list can plug
//! in their own table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::canon::Canon;
use crate::tables::{AP_BOOKS, NT_BOOKS, OT_BOOKS};

// Precomputed code -> canon map for O(1) lookups.
static BOOK_CANON: Lazy<HashMap<&'static str, Canon>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(OT_BOOKS.len() + NT_BOOKS.len() + AP_BOOKS.len());
    for (books, canon) in [(OT_BOOKS, Canon::Ot), (NT_BOOKS, Canon::Nt), (AP_BOOKS, Canon::Ap)] {
        for book in books {
            map.insert(*book, canon);
        }
    }
    map
});

/// Read-only lookup of book codes.
///
/// Implementations must be thread-safe (`Send + Sync`); lookups never
/// mutate the underlying table.
pub trait BookRegistry: Send + Sync {
    /// Returns `true` if `code` is a known book code. Case-sensitive.
    fn is_valid_code(&self, code: &str) -> bool;

    /// The canon of `code`, or `None` if the code is unknown.
    fn canon_of(&self, code: &str) -> Option<Canon>;

    /// All known codes, in registry order.
    fn codes(&self) -> Vec<&str>;

    /// The canon of `code`, falling back to [`Canon::Ap`] for unknown codes.
    fn canon_or_default(&self, code: &str) -> Canon {
        self.canon_of(code).unwrap_or_default()
    }

    /// All known codes belonging to `canon`, in registry order.
    fn books_in(&self, canon: Canon) -> Vec<&str> {
        self.codes()
            .into_iter()
            .filter(|code| self.canon_of(code) == Some(canon))
            .collect()
    }
}

/// The standard USFM book list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsfmBooks;

impl BookRegistry for UsfmBooks {
    fn is_valid_code(&self, code: &str) -> bool {
        BOOK_CANON.contains_key(code)
    }

    fn canon_of(&self, code: &str) -> Option<Canon> {
        BOOK_CANON.get(code).copied()
    }

    fn codes(&self) -> Vec<&str> {
        let codes: Vec<&'static str> = crate::tables::all_books().collect();
        codes
    }

    fn books_in(&self, canon: Canon) -> Vec<&str> {
        match canon {
            Canon::Ot => OT_BOOKS.to_vec(),
            Canon::Nt => NT_BOOKS.to_vec(),
            Canon::Ap => AP_BOOKS.to_vec(),
        }
    }
}

/// Return the canon category of a book, defaulting to [`Canon::Ap`].
///
/// # Examples
///
/// ```
/// use usfm_books::{convert_book_to_canon, Canon};
///
/// assert_eq!(convert_book_to_canon("GEN"), Canon::Ot);
/// assert_eq!(convert_book_to_canon("REV"), Canon::Nt);
/// assert_eq!(convert_book_to_canon("ZZZ"), Canon::Ap);
/// ```
pub fn convert_book_to_canon(book: &str) -> Canon {
    UsfmBooks.canon_or_default(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_known_books() {
        assert_eq!(convert_book_to_canon("GEN"), Canon::Ot);
        assert_eq!(convert_book_to_canon("NEH"), Canon::Ot);
        assert_eq!(convert_book_to_canon("MAT"), Canon::Nt);
        assert_eq!(convert_book_to_canon("REV"), Canon::Nt);
        assert_eq!(convert_book_to_canon("LKA"), Canon::Nt);
        assert_eq!(convert_book_to_canon("PS2"), Canon::Ap);
    }

    #[test]
    fn unknown_book_defaults_to_apocrypha() {
        assert_eq!(convert_book_to_canon("ZZZ"), Canon::Ap);
        assert_eq!(convert_book_to_canon(""), Canon::Ap);
        assert!(!UsfmBooks.is_valid_code("ZZZ"));
        assert_eq!(UsfmBooks.canon_of("ZZZ"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(UsfmBooks.is_valid_code("GEN"));
        assert!(!UsfmBooks.is_valid_code("gen"));
    }

    #[test]
    fn books_in_matches_tables() {
        assert_eq!(UsfmBooks.books_in(Canon::Ot).len(), OT_BOOKS.len());
        assert_eq!(UsfmBooks.books_in(Canon::Nt), NT_BOOKS.to_vec());
        assert!(UsfmBooks.books_in(Canon::Ap).contains(&"TOB"));
    }

    struct GospelsOnly;

    impl BookRegistry for GospelsOnly {
        fn is_valid_code(&self, code: &str) -> bool {
            matches!(code, "MAT" | "MRK" | "LUK" | "JHN")
        }

        fn canon_of(&self, code: &str) -> Option<Canon> {
            self.is_valid_code(code).then_some(Canon::Nt)
        }

        fn codes(&self) -> Vec<&str> {
            vec!["MAT", "MRK", "LUK", "JHN"]
        }
    }

    #[test]
    fn provided_methods_work_for_custom_registry() {
        assert_eq!(GospelsOnly.canon_or_default("GEN"), Canon::Ap);
        assert_eq!(GospelsOnly.canon_or_default("JHN"), Canon::Nt);
        assert_eq!(GospelsOnly.books_in(Canon::Nt).len(), 4);
        assert!(GospelsOnly.books_in(Canon::Ot).is_empty());
    }
}
