//! Boolean validity checks over reference strings.
//!
//! Each check parses the input with [`Reference::from_string`] and inspects
//! the result. Parse errors are swallowed and reported as `false`; use the
//! parser directly when the reason for a rejection matters.
//!
//! - Chapter: `GEN.1`, `PSA.1_2`
//! - Chapter or intro: the above, plus `GEN.INTRO1`
//! - Single verse: `GEN.1.1`
//! - Multi verse: anything covering more than one verse (`JAS.1.1+JAS.1.2`,
//!   `GEN.1.1-2`)
//! - Reference / passage: anything that parses

use crate::reference::Reference;

pub use usfm_books::convert_book_to_canon;

/// Delimiter [`is_valid_multi_verse_reference`] expects by default.
pub const DEFAULT_MULTI_DELIMITER: &str = "+";

/// Returns `true` if `reference` is a whole chapter.
///
/// # Examples
///
/// ```
/// use usfm_refs::validate::is_valid_chapter_reference;
///
/// assert!(is_valid_chapter_reference("GEN.1"));
/// assert!(is_valid_chapter_reference("PSA.1_1"));
/// assert!(!is_valid_chapter_reference("GEN.1.1"));
/// assert!(!is_valid_chapter_reference("GEN.INTRO1"));
/// ```
pub fn is_valid_chapter_reference(reference: &str) -> bool {
    Reference::from_string(reference).is_ok_and(|r| r.is_chapter())
}

/// Returns `true` if `reference` is a whole chapter or an intro.
pub fn is_valid_chapter_or_intro_reference(reference: &str) -> bool {
    Reference::from_string(reference).is_ok_and(|r| r.is_chapter() || r.is_intro())
}

/// Returns `true` if `reference` parses at all.
pub fn is_valid_reference(reference: &str) -> bool {
    Reference::from_string(reference).is_ok()
}

/// Returns `true` if `reference` is exactly one verse.
pub fn is_valid_single_verse_reference(reference: &str) -> bool {
    Reference::from_string(reference).is_ok_and(|r| r.is_single_verse())
}

/// Returns `true` if `reference` covers more than one individual verse.
///
/// Segments may be joined by `delimiter` instead of `+`; it is replaced
/// with `+` before parsing. A single range such as `GEN.1.1-2` counts,
/// since it covers two verses.
///
/// # Examples
///
/// ```
/// use usfm_refs::validate::is_valid_multi_verse_reference;
///
/// assert!(is_valid_multi_verse_reference("JAS.1.1+JAS.1.2", "+"));
/// assert!(is_valid_multi_verse_reference("JAS.1.1,JAS.1.2", ","));
/// assert!(!is_valid_multi_verse_reference("JAS.1.1", "+"));
/// ```
pub fn is_valid_multi_verse_reference(reference: &str, delimiter: &str) -> bool {
    let joined = reference.replace(delimiter, DEFAULT_MULTI_DELIMITER);
    Reference::from_string(&joined).is_ok_and(|r| r.to_single_verses().len() > 1)
}

/// Returns `true` if `passage` parses at all. Same as [`is_valid_reference`].
pub fn is_valid_passage_reference(passage: &str) -> bool {
    is_valid_reference(passage)
}
