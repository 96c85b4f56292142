use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use usfm_books::Canon;

#[derive(Parser)]
#[command(
    name = "usfm",
    about = "Parse, check and normalize USFM scripture references",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse references and print their canonical form
    Parse(ParseArgs),
    /// Check whether references are valid
    Check(CheckArgs),
    /// Split a reference into single verses or verse ranges
    Expand(ExpandArgs),
    /// Show the canon of book codes
    Canon(CanonArgs),
    /// List known book codes
    Books(BooksArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    #[arg(required = true)]
    pub references: Vec<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub references: Vec<String>,
    #[arg(long, value_enum, default_value = "any")]
    pub kind: CheckKind,
    /// Segment delimiter for `--kind multi` (overrides the config file)
    #[arg(long)]
    pub delimiter: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Any,
    Chapter,
    ChapterOrIntro,
    Verse,
    Multi,
    Passage,
}

#[derive(Args)]
pub struct ExpandArgs {
    pub reference: String,
    /// Split into verse ranges instead of single verses
    #[arg(long)]
    pub ranges: bool,
}

#[derive(Args)]
pub struct CanonArgs {
    #[arg(required = true)]
    pub books: Vec<String>,
}

#[derive(Args)]
pub struct BooksArgs {
    #[arg(long)]
    pub canon: Option<Canon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_parse() {
        let cli = Cli::try_parse_from(["usfm", "parse", "GEN.1.1", "GEN.2"]).unwrap();
        if let Command::Parse(args) = cli.command {
            assert_eq!(args.references, vec!["GEN.1.1", "GEN.2"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_requires_reference() {
        assert!(Cli::try_parse_from(["usfm", "parse"]).is_err());
    }

    #[test]
    fn parse_check_defaults() {
        let cli = Cli::try_parse_from(["usfm", "check", "GEN.1"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.kind, CheckKind::Any);
            assert!(args.delimiter.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check_kind_and_delimiter() {
        let cli = Cli::try_parse_from([
            "usfm", "check", "--kind", "chapter-or-intro", "--delimiter", ",", "GEN.1",
        ])
        .unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.kind, CheckKind::ChapterOrIntro);
            assert_eq!(args.delimiter, Some(",".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_expand_ranges() {
        let cli = Cli::try_parse_from(["usfm", "expand", "--ranges", "GEN.1.1-3"]).unwrap();
        if let Command::Expand(args) = cli.command {
            assert!(args.ranges);
            assert_eq!(args.reference, "GEN.1.1-3");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_books_canon() {
        let cli = Cli::try_parse_from(["usfm", "books", "--canon", "nt"]).unwrap();
        if let Command::Books(args) = cli.command {
            assert_eq!(args.canon, Some(Canon::Nt));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_books_rejects_unknown_canon() {
        assert!(Cli::try_parse_from(["usfm", "books", "--canon", "xx"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "usfm", "--verbose", "--no-color", "--format", "json", "canon", "GEN",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["usfm", "books", "--config", "usfm.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("usfm.toml")));
    }
}
