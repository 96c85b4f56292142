//! Static USFM book code tables, partitioned by canon.
//!
//! Codes are the three-character USFM identifiers, always uppercase. The
//! order within each table is the conventional canonical order.

/// Old Testament book codes.
pub const OT_BOOKS: &[&str] = &[
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
];

/// New Testament book codes.
///
/// Includes `LKA`, the combined Luke-Acts code used by some publishers.
pub const NT_BOOKS: &[&str] = &[
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV", "LKA",
];

/// Deuterocanonical and apocryphal book codes.
pub const AP_BOOKS: &[&str] = &[
    "TOB", "JDT", "ESG", "WIS", "SIR", "BAR", "LJE", "S3Y", "SUS", "BEL", "1MA", "2MA", "3MA",
    "4MA", "1ES", "2ES", "MAN", "PS2", "ODA", "PSS", "EZA", "5EZ", "6EZ", "DAG", "PS3", "2BA",
    "LBA", "JUB", "ENO", "1MQ", "2MQ", "3MQ", "REP", "4BA", "LAO",
];

/// Every known book code: Old Testament, then New Testament, then apocrypha.
pub fn all_books() -> impl Iterator<Item = &'static str> {
    OT_BOOKS
        .iter()
        .chain(NT_BOOKS)
        .chain(AP_BOOKS)
        .copied()
}
