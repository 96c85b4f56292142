//! Error types for reference parsing and formatting.

use thiserror::Error;

/// A reference string violates the USFM reference grammar.
///
/// Every validation failure is reported through this one type. The message
/// names the rule that was broken and the offending substring.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceFormatError {
    /// The input was empty or only whitespace.
    #[error("empty reference")]
    Empty,

    /// A segment did not split into `BOOK.CHAPTER` or `BOOK.CHAPTER.VERSE`.
    #[error("invalid USFM code {segment}: expected 2 or 3 dot-separated fields")]
    FieldCount { segment: String },

    /// The book code is not three characters or is not in the registry.
    #[error("invalid USFM book code {book}")]
    UnknownBook { book: String },

    /// `INTRO` was not followed by a positive number.
    #[error("invalid intro reference {field}")]
    InvalidIntro { field: String },

    /// The chapter number is missing, non-numeric, or outside `1..1000`.
    #[error("invalid chapter {field}")]
    InvalidChapter { field: String },

    /// The `_section` suffix is empty, non-numeric, or zero.
    #[error("invalid section {field}")]
    InvalidSection { field: String },

    /// The verse field is malformed, outside `1..1000`, or has start > end.
    #[error("invalid verse range {field}")]
    InvalidVerseRange { field: String },

    /// An intro segment carried a verse field.
    #[error("intro reference {segment} cannot have verses")]
    IntroWithVerses { segment: String },

    /// `+`-joined segments pointed at different chapters or intros.
    #[error("references must be in the same chapter: {first} and {segment}")]
    ChapterMismatch { first: String, segment: String },
}

/// A [`Reference`](crate::Reference) was found in a state the parser can
/// never produce. This is a bug, not bad input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("internal error: reference {book:?} has no chapter, intro, or verses")]
pub struct InvariantViolation {
    pub book: String,
}

/// Convenience type alias for reference parsing.
pub type Result<T> = std::result::Result<T, ReferenceFormatError>;
