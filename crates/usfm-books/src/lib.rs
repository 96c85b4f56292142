//! USFM book codes and canon categories.
//!
//! This crate is the static book table consumed by `usfm-refs`. It knows
//! which three-letter codes are valid and which canon each one belongs to.
//!
//! # Key Types
//!
//! - [`Canon`] — Old Testament, New Testament, or apocrypha/other
//! - [`BookRegistry`] — Lookup interface used by the reference parser
//! - [`UsfmBooks`] — The standard USFM book list
//!
//! Unknown codes are never an error for canon lookups: they fall back to
//! [`Canon::Ap`].

pub mod canon;
pub mod error;
pub mod registry;
pub mod tables;

pub use canon::Canon;
pub use error::BookError;
pub use registry::{convert_book_to_canon, BookRegistry, UsfmBooks};
pub use tables::{all_books, AP_BOOKS, NT_BOOKS, OT_BOOKS};
