use thiserror::Error;

/// Errors produced by book registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("unknown canon tag: {0}")]
    UnknownCanon(String),
}
