//! USFM scripture references.
//!
//! This crate parses compact reference strings such as `GEN.1.1-3+GEN.1.5`
//! into a normalized [`Reference`], and renders them back to the same
//! canonical notation.
//!
//! # Notation
//!
//! - `GEN.1` — a whole chapter
//! - `PSA.1_2` — chapter 1, section 2
//! - `GEN.INTRO1` — the first introduction to Genesis
//! - `DAN.3.4-7` — a verse range
//! - `GEN.1.1+GEN.1.3` — several ranges in one chapter
//!
//! Verse ranges are always sorted, and overlapping or touching ranges are
//! merged: `GEN.1.1+GEN.1.2+GEN.1.3` is the same reference as `GEN.1.1-3`.
//! A whole-chapter segment absorbs any verse segments next to it.
//!
//! # Modules
//!
//! - [`error`] — [`ReferenceFormatError`] and [`InvariantViolation`]
//! - [`types`] — [`VerseRange`]
//! - [`reference`] — The [`Reference`] value type
//! - [`parser`] — String parsing
//! - [`normalize`] — Verse range merging
//! - [`validate`] — Boolean checks over reference strings

pub mod error;
pub mod normalize;
pub mod parser;
pub mod reference;
pub mod types;
pub mod validate;

pub use error::{InvariantViolation, ReferenceFormatError, Result};
pub use normalize::normalize_verses;
pub use reference::Reference;
pub use types::VerseRange;
pub use usfm_books::{BookRegistry, Canon, UsfmBooks};
