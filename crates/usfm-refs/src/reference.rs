//! The [`Reference`] value type: queries, derivations and formatting.
//!
//! A reference is one of three shapes:
//!
//! - **verses**: a chapter plus one or more verse ranges (`GEN.1.1-3+GEN.1.5`)
//! - **whole chapter**: a chapter with no verses (`GEN.1`, `PSA.1_1`)
//! - **intro**: a book introduction (`GEN.INTRO1`)
//!
//! There is no public constructor that skips validation. Values come from
//! the parser or from the derivation methods below, and every one of them
//! normalizes its verse list before returning.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::error;
use usfm_books::{BookRegistry, Canon, UsfmBooks};

use crate::error::{InvariantViolation, ReferenceFormatError};
use crate::normalize::normalize_verses;
use crate::types::VerseRange;

/// A parsed, normalized USFM scripture reference.
///
/// Equality is structural: book, chapter, section, intro and the
/// normalized verse list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference {
    book: String,
    chapter: u32,
    section: u32,
    intro: u32,
    verses: Vec<VerseRange>,
}

impl Reference {
    pub(crate) fn from_parts(
        book: impl Into<String>,
        chapter: u32,
        section: u32,
        intro: u32,
        verses: Vec<VerseRange>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter,
            section,
            intro,
            verses: normalize_verses(verses),
        }
    }

    // Same book/chapter/section/intro with a different verse list.
    fn with_verses(&self, verses: Vec<VerseRange>) -> Self {
        Self::from_parts(
            self.book.clone(),
            self.chapter,
            self.section,
            self.intro,
            verses,
        )
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// The three-character book code.
    pub fn book(&self) -> &str {
        &self.book
    }

    /// Chapter number, or 0 for intro references.
    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Sub-chapter section number, or 0 if there is none.
    pub fn section(&self) -> u32 {
        self.section
    }

    /// Intro number, or 0 for chapter references.
    pub fn intro(&self) -> u32 {
        self.intro
    }

    /// The normalized verse ranges. Empty for whole chapters and intros.
    pub fn verses(&self) -> &[VerseRange] {
        &self.verses
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Returns `true` if the reference is a whole chapter.
    pub fn is_chapter(&self) -> bool {
        self.chapter > 0 && self.verses.is_empty()
    }

    /// Returns `true` if the reference is an intro.
    pub fn is_intro(&self) -> bool {
        self.intro > 0
    }

    /// Returns `true` if the reference is exactly one verse.
    pub fn is_single_verse(&self) -> bool {
        self.chapter > 0 && matches!(self.verses.as_slice(), [range] if range.is_single())
    }

    /// Returns `true` if the reference is one contiguous range of two or
    /// more verses.
    pub fn is_verse_range(&self) -> bool {
        self.chapter > 0 && matches!(self.verses.as_slice(), [range] if !range.is_single())
    }

    /// Returns `true` if `self` and `other` name the same chapter or intro,
    /// ignoring verses.
    pub fn same_chapter_or_intro(&self, other: &Reference) -> bool {
        self.book == other.book
            && self.chapter == other.chapter
            && self.section == other.section
            && self.intro == other.intro
    }

    /// Total number of individual verses covered.
    pub fn verse_count(&self) -> u32 {
        self.verses.iter().map(VerseRange::len).sum()
    }

    /// Returns `true` if `verse` is one of the referenced verses.
    ///
    /// Whole chapters and intros list no verses and always return `false`.
    pub fn contains_verse(&self, verse: u32) -> bool {
        self.verses.iter().any(|range| range.contains(verse))
    }

    /// Canon category of the book, looked up in the standard book list.
    pub fn canon(&self) -> Canon {
        self.canon_with(&UsfmBooks)
    }

    /// Canon category of the book according to `registry`.
    ///
    /// Never fails: unknown books fall back to [`Canon::Ap`].
    pub fn canon_with<R: BookRegistry + ?Sized>(&self, registry: &R) -> Canon {
        registry.canon_or_default(&self.book)
    }

    // ---------------------------------------------------------------
    // Derivations
    // ---------------------------------------------------------------

    /// The chapter or intro this reference belongs to, without verses.
    pub fn to_chapter_or_intro(&self) -> Reference {
        self.with_verses(Vec::new())
    }

    /// One reference per individual verse, in ascending order.
    ///
    /// `GEN.1.1-3+GEN.1.5` becomes `GEN.1.1`, `GEN.1.2`, `GEN.1.3`, `GEN.1.5`.
    pub fn to_single_verses(&self) -> Vec<Reference> {
        self.verses
            .iter()
            .flat_map(VerseRange::verses)
            .map(|verse| self.with_verses(vec![VerseRange::from_verse(verse)]))
            .collect()
    }

    /// One reference per stored verse range, in ascending order.
    pub fn to_verse_ranges(&self) -> Vec<Reference> {
        self.verses
            .iter()
            .map(|range| self.with_verses(vec![*range]))
            .collect()
    }

    // ---------------------------------------------------------------
    // Formatting
    // ---------------------------------------------------------------

    /// Render the canonical USFM string.
    ///
    /// Fails only if the reference has no chapter, intro or verses, which
    /// the parser never produces.
    pub fn to_usfm(&self) -> Result<String, InvariantViolation> {
        if self.verses.is_empty() && self.chapter == 0 && self.intro == 0 {
            return Err(InvariantViolation {
                book: self.book.clone(),
            });
        }
        Ok(self.to_string())
    }

    fn write_chapter(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.book, self.chapter)?;
        if self.section > 0 {
            write!(f, "_{}", self.section)?;
        }
        Ok(())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.verses.is_empty() {
            for (i, range) in self.verses.iter().enumerate() {
                if i > 0 {
                    f.write_str("+")?;
                }
                self.write_chapter(f)?;
                write!(f, ".{range}")?;
            }
            Ok(())
        } else if self.chapter > 0 {
            self.write_chapter(f)
        } else if self.intro > 0 {
            write!(f, "{}.INTRO{}", self.book, self.intro)
        } else {
            error!(book = %self.book, "reference has no chapter, intro, or verses");
            Err(fmt::Error)
        }
    }
}

impl std::str::FromStr for Reference {
    type Err = ReferenceFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Reference {
    type Error = ReferenceFormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Reference {
    type Error = ReferenceFormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_string()
    }
}
