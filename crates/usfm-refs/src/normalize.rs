//! Canonical ordering and merging of verse intervals.
//!
//! After normalization the intervals are sorted by start and strictly
//! separated: for consecutive ranges `a`, `b` we have `a.end + 1 < b.start`.
//! Overlapping ranges and ranges that merely touch (`1-3` and `4-6`) are
//! merged into one.

use crate::types::VerseRange;

/// Sort and merge verse intervals into canonical form.
///
/// Idempotent: normalizing an already-normalized list returns it unchanged.
///
/// # Examples
///
/// ```
/// use usfm_refs::{normalize_verses, VerseRange};
///
/// let merged = normalize_verses(vec![
///     VerseRange::single(4).unwrap(),
///     VerseRange::new(1, 3).unwrap(),
///     VerseRange::single(7).unwrap(),
/// ]);
/// assert_eq!(merged, vec![VerseRange::new(1, 4).unwrap(), VerseRange::single(7).unwrap()]);
/// ```
pub fn normalize_verses(mut verses: Vec<VerseRange>) -> Vec<VerseRange> {
    if verses.len() < 2 {
        return verses;
    }
    verses.sort_unstable();

    let mut merged: Vec<VerseRange> = Vec::with_capacity(verses.len());
    for range in verses {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() + 1 => {
                *last = last.with_end(last.end().max(range.end()));
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Returns `true` if `verses` is already in canonical form.
pub fn is_normalized(verses: &[VerseRange]) -> bool {
    verses
        .windows(2)
        .all(|pair| pair[0].end() + 1 < pair[1].start())
}
