//! Verse interval type shared by the parser, normalizer and formatter.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{ReferenceFormatError, Result};

/// Upper bound (exclusive) for chapter and verse numbers.
pub const MAX_NUMBER: u32 = 1000;

/// A closed interval of verse numbers within one chapter.
///
/// Always satisfies `1 <= start <= end < 1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VerseRange {
    start: u32,
    end: u32,
}

impl VerseRange {
    /// Create a verse range, checking the numeric bounds.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if !(1 <= start && start <= end && end < MAX_NUMBER) {
            return Err(ReferenceFormatError::InvalidVerseRange {
                field: format!("{start}-{end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one verse.
    pub fn single(verse: u32) -> Result<Self> {
        Self::new(verse, verse)
    }

    /// First verse in the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last verse in the range (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` if the range covers exactly one verse.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of verses covered. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Returns `true` if `verse` falls inside the range.
    pub fn contains(&self, verse: u32) -> bool {
        self.as_range().contains(&verse)
    }

    /// The individual verse numbers in ascending order.
    pub fn verses(&self) -> RangeInclusive<u32> {
        self.as_range()
    }

    // The crate-internal constructors below only ever receive numbers taken
    // from ranges that already passed `new`.
    pub(crate) fn from_verse(verse: u32) -> Self {
        Self {
            start: verse,
            end: verse,
        }
    }

    pub(crate) fn with_end(self, end: u32) -> Self {
        Self { start: self.start, end }
    }

    fn as_range(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
