//! Parsing of USFM reference strings.
//!
//! Grammar:
//!
//! ```text
//! reference   := segment ("+" segment)*
//! segment     := BOOK "." chapterpart ["." versepart]
//! chapterpart := "INTRO" DIGITS | DIGITS ["_" DIGITS]
//! versepart   := DIGITS ["-" DIGITS]
//! ```
//!
//! All `+`-joined segments must name the same chapter (or intro). If any
//! segment is a whole chapter, the result is that whole chapter.

use tracing::{debug, trace};
use usfm_books::{BookRegistry, UsfmBooks};

use crate::error::{ReferenceFormatError, Result};
use crate::reference::Reference;
use crate::types::{VerseRange, MAX_NUMBER};

/// Separates segments of a multi-part reference.
pub const SEGMENT_DELIMITER: char = '+';

const FIELD_DELIMITER: char = '.';
const SECTION_DELIMITER: char = '_';
const RANGE_DELIMITER: char = '-';
const INTRO_PREFIX: &str = "INTRO";

impl Reference {
    /// Parse a reference string against the standard USFM book list.
    ///
    /// Leading and trailing whitespace is ignored. Verse ranges are sorted
    /// and touching or overlapping ranges merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use usfm_refs::Reference;
    ///
    /// let reference = Reference::from_string("GEN.1.1+GEN.1.2+GEN.1.3").unwrap();
    /// assert_eq!(reference.to_string(), "GEN.1.1-3");
    ///
    /// let chapter = Reference::from_string("GEN.1.1+GEN.1").unwrap();
    /// assert!(chapter.is_chapter());
    ///
    /// assert!(Reference::from_string("GEN.1+GEN.2").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self> {
        Self::parse_with(s, &UsfmBooks)
    }

    /// Parse a reference string, validating book codes against `registry`.
    pub fn parse_with<R: BookRegistry + ?Sized>(s: &str, registry: &R) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceFormatError::Empty);
        }

        let mut segments = s.split(SEGMENT_DELIMITER);
        let first = segments.next().unwrap_or_default();
        let head = parse_segment(first, registry)?;
        let mut saw_full_chapter = head.is_chapter();
        let mut verses = head.verses().to_vec();
        let mut count = 1usize;

        for segment in segments {
            let next = parse_segment(segment, registry)?;
            if next.is_chapter() {
                saw_full_chapter = true;
            }
            if !head.same_chapter_or_intro(&next) {
                return Err(ReferenceFormatError::ChapterMismatch {
                    first: first.to_string(),
                    segment: segment.to_string(),
                });
            }
            verses.extend_from_slice(next.verses());
            count += 1;
        }

        let combined = Reference::from_parts(
            head.book(),
            head.chapter(),
            head.section(),
            head.intro(),
            verses,
        );
        if saw_full_chapter {
            if !combined.verses().is_empty() {
                debug!(
                    reference = %combined,
                    segments = count,
                    "whole chapter absorbs verse segments"
                );
            }
            return Ok(combined.to_chapter_or_intro());
        }
        if count > 1 {
            debug!(reference = %combined, segments = count, "combined multi-part reference");
        }
        Ok(combined)
    }
}

/// Parse one `BOOK.CHAPTER[.VERSE]` segment.
fn parse_segment<R: BookRegistry + ?Sized>(segment: &str, registry: &R) -> Result<Reference> {
    parse_segment_fields(segment, registry).inspect_err(|e| {
        trace!(segment, error = %e, "rejected reference segment");
    })
}

fn parse_segment_fields<R: BookRegistry + ?Sized>(
    segment: &str,
    registry: &R,
) -> Result<Reference> {
    let fields: Vec<&str> = segment.split(FIELD_DELIMITER).collect();
    let (book, chapter_field, verse_field) = match fields.as_slice() {
        [book, chapter] => (*book, *chapter, None),
        [book, chapter, verse] => (*book, *chapter, Some(*verse)),
        _ => {
            return Err(ReferenceFormatError::FieldCount {
                segment: segment.to_string(),
            })
        }
    };

    if book.len() != 3 || !registry.is_valid_code(book) {
        return Err(ReferenceFormatError::UnknownBook {
            book: book.to_string(),
        });
    }

    let target = parse_chapter(chapter_field)?;
    let verses = match verse_field {
        None => Vec::new(),
        Some(_) if target.intro > 0 => {
            return Err(ReferenceFormatError::IntroWithVerses {
                segment: segment.to_string(),
            })
        }
        Some(field) => vec![parse_verse_range(field)?],
    };

    Ok(Reference::from_parts(
        book,
        target.chapter,
        target.section,
        target.intro,
        verses,
    ))
}

/// The chapter-or-intro part of a segment.
#[derive(Debug, Default, PartialEq, Eq)]
struct ChapterTarget {
    chapter: u32,
    section: u32,
    intro: u32,
}

/// Parse `INTRO<n>` or `<chapter>[_<section>]`.
fn parse_chapter(field: &str) -> Result<ChapterTarget> {
    if let Some(digits) = field.strip_prefix(INTRO_PREFIX) {
        let intro = parse_number(digits)
            .filter(|n| *n >= 1)
            .ok_or_else(|| ReferenceFormatError::InvalidIntro {
                field: field.to_string(),
            })?;
        return Ok(ChapterTarget {
            intro,
            ..Default::default()
        });
    }

    let (chapter_digits, section_digits) = match field.split_once(SECTION_DELIMITER) {
        Some((chapter, section)) => (chapter, Some(section)),
        None => (field, None),
    };

    let chapter = parse_number(chapter_digits)
        .filter(|n| (1..MAX_NUMBER).contains(n))
        .ok_or_else(|| ReferenceFormatError::InvalidChapter {
            field: field.to_string(),
        })?;

    let section = match section_digits {
        None => 0,
        Some(digits) => parse_number(digits).filter(|n| *n >= 1).ok_or_else(|| {
            ReferenceFormatError::InvalidSection {
                field: field.to_string(),
            }
        })?,
    };

    Ok(ChapterTarget {
        chapter,
        section,
        intro: 0,
    })
}

/// Parse `<start>[-<end>]`.
fn parse_verse_range(field: &str) -> Result<VerseRange> {
    let invalid = || ReferenceFormatError::InvalidVerseRange {
        field: field.to_string(),
    };

    let (start_digits, end_digits) = match field.split_once(RANGE_DELIMITER) {
        Some((start, end)) => (start, Some(end)),
        None => (field, None),
    };
    let start = parse_number(start_digits).ok_or_else(invalid)?;
    let end = match end_digits {
        Some(digits) => parse_number(digits).ok_or_else(invalid)?,
        None => start,
    };
    VerseRange::new(start, end).map_err(|_| invalid())
}

/// A non-empty run of ASCII digits. `None` for anything else, including
/// values that do not fit in a `u32`.
fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
