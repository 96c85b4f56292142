use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookError;

/// Canon category of a book.
///
/// Every USFM book code belongs to exactly one category. Codes that are not
/// in the registry are treated as [`Canon::Ap`] by the lookup helpers.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Canon {
    /// Old Testament.
    Ot,
    /// New Testament.
    Nt,
    /// Apocrypha, deuterocanon and anything else.
    #[default]
    Ap,
}

impl Canon {
    /// All categories in canonical order.
    pub const ALL: [Canon; 3] = [Canon::Ot, Canon::Nt, Canon::Ap];

    /// The short lowercase tag (`"ot"`, `"nt"` or `"ap"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ot => "ot",
            Self::Nt => "nt",
            Self::Ap => "ap",
        }
    }
}

impl fmt::Display for Canon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Canon {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ot" => Ok(Self::Ot),
            "nt" => Ok(Self::Nt),
            "ap" => Ok(Self::Ap),
            _ => Err(BookError::UnknownCanon(s.to_string())),
        }
    }
}
