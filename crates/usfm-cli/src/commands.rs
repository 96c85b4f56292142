use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use usfm_books::{convert_book_to_canon, BookRegistry, Canon, UsfmBooks};
use usfm_refs::validate::{
    is_valid_chapter_or_intro_reference, is_valid_chapter_reference,
    is_valid_multi_verse_reference, is_valid_passage_reference, is_valid_reference,
    is_valid_single_verse_reference,
};
use usfm_refs::{Reference, VerseRange};

use crate::cli::*;
use crate::config::CliConfig;

/// Run `command`, writing its report to `out`.
///
/// Returns `Ok(false)` when some input was rejected, so the caller can
/// exit with a failure status after the full report has been printed.
pub fn run_command(command: Command, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Command::Parse(args) => cmd_parse(args, config, out),
        Command::Check(args) => cmd_check(args, config, out),
        Command::Expand(args) => cmd_expand(args, config, out),
        Command::Canon(args) => cmd_canon(args, config, out),
        Command::Books(args) => cmd_books(args, config, out),
    }
}

#[derive(Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<&'a Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canon: Option<Canon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verses: Option<&'a [VerseRange]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Short name for the shape of a parsed reference.
fn shape(reference: &Reference) -> &'static str {
    if reference.is_intro() {
        "intro"
    } else if reference.is_chapter() {
        "chapter"
    } else if reference.is_single_verse() {
        "verse"
    } else if reference.is_verse_range() {
        "range"
    } else {
        "passage"
    }
}

fn cmd_parse(args: ParseArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for input in &args.references {
        let parsed = Reference::from_string(input);
        all_ok &= parsed.is_ok();
        match config.format {
            OutputFormat::Json => {
                let report = match &parsed {
                    Ok(reference) => ParseReport {
                        input,
                        reference: Some(reference),
                        shape: Some(shape(reference)),
                        canon: Some(reference.canon()),
                        verses: Some(reference.verses()),
                        error: None,
                    },
                    Err(e) => ParseReport {
                        input,
                        reference: None,
                        shape: None,
                        canon: None,
                        verses: None,
                        error: Some(e.to_string()),
                    },
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text => match &parsed {
                Ok(reference) => writeln!(
                    out,
                    "{} {}  {} | {} | {} verses",
                    "✓".green(),
                    reference.to_string().bold(),
                    shape(reference).cyan(),
                    reference.canon(),
                    reference.verse_count(),
                )?,
                Err(e) => writeln!(out, "{} {}  {}", "✗".red(), input.bold(), e.to_string().red())?,
            },
        }
    }
    Ok(all_ok)
}

#[derive(Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    kind: CheckKind,
    valid: bool,
}

fn check(kind: CheckKind, input: &str, delimiter: &str) -> bool {
    match kind {
        CheckKind::Any => is_valid_reference(input),
        CheckKind::Chapter => is_valid_chapter_reference(input),
        CheckKind::ChapterOrIntro => is_valid_chapter_or_intro_reference(input),
        CheckKind::Verse => is_valid_single_verse_reference(input),
        CheckKind::Multi => is_valid_multi_verse_reference(input, delimiter),
        CheckKind::Passage => is_valid_passage_reference(input),
    }
}

fn cmd_check(args: CheckArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let delimiter = args.delimiter.as_deref().unwrap_or(&config.multi_delimiter);
    let mut all_ok = true;
    for input in &args.references {
        let valid = check(args.kind, input, delimiter);
        all_ok &= valid;
        match config.format {
            OutputFormat::Json => {
                let report = CheckReport { input, kind: args.kind, valid };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text if valid => writeln!(out, "{} {}", "✓".green(), input)?,
            OutputFormat::Text => writeln!(out, "{} {}", "✗".red(), input.red())?,
        }
    }
    Ok(all_ok)
}

fn cmd_expand(args: ExpandArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let reference = Reference::from_string(&args.reference)
        .with_context(|| format!("cannot expand {}", args.reference))?;
    let parts = if args.ranges {
        reference.to_verse_ranges()
    } else {
        reference.to_single_verses()
    };
    match config.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&parts)?)?,
        OutputFormat::Text => {
            for part in &parts {
                writeln!(out, "{part}")?;
            }
        }
    }
    Ok(true)
}

#[derive(Serialize)]
struct CanonReport<'a> {
    book: &'a str,
    canon: Canon,
    known: bool,
}

fn cmd_canon(args: CanonArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    for book in &args.books {
        let canon = convert_book_to_canon(book);
        let known = UsfmBooks.is_valid_code(book);
        match config.format {
            OutputFormat::Json => {
                let report = CanonReport { book, canon, known };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text if known => writeln!(out, "{} {}", book.bold(), canon)?,
            OutputFormat::Text => {
                writeln!(out, "{} {} {}", book.bold(), canon, "(unknown book)".dimmed())?
            }
        }
    }
    Ok(true)
}

fn cmd_books(args: BooksArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let canons: Vec<Canon> = match args.canon {
        Some(canon) => vec![canon],
        None => Canon::ALL.to_vec(),
    };
    for canon in canons {
        let books = UsfmBooks.books_in(canon);
        match config.format {
            OutputFormat::Json => {
                for book in books {
                    let report = CanonReport { book, canon, known: true };
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                }
            }
            OutputFormat::Text => {
                writeln!(out, "{} ({})", canon.to_string().yellow().bold(), books.len())?;
                writeln!(out, "  {}", books.join(" "))?;
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run(args: &[&str]) -> (bool, String) {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(args).unwrap();
        let config = CliConfig::default().with_overrides(&cli);
        let mut out = Vec::new();
        let ok = run_command(cli.command, &config, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_prints_canonical_form() {
        let (ok, out) = run(&["usfm", "parse", "GEN.1.3+GEN.1.1+GEN.1.2"]);
        assert!(ok);
        assert!(out.contains("GEN.1.1-3"));
        assert!(out.contains("range"));
        assert!(out.contains("ot"));
    }

    #[test]
    fn parse_reports_failures() {
        let (ok, out) = run(&["usfm", "parse", "GEN.1", "GEN.1+GEN.2"]);
        assert!(!ok);
        assert!(out.contains("GEN.1"));
        assert!(out.contains("same chapter"));
    }

    #[test]
    fn parse_json() {
        let (ok, out) = run(&["usfm", "--format", "json", "parse", "GEN.1.1+GEN.1"]);
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["reference"], "GEN.1");
        assert_eq!(value["shape"], "chapter");
        assert_eq!(value["canon"], "ot");
    }

    #[test]
    fn parse_json_error() {
        let (ok, out) = run(&["usfm", "--format", "json", "parse", "GENE.1.1"]);
        assert!(!ok);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert!(value["error"].as_str().unwrap().contains("GENE"));
        assert!(value.get("reference").is_none());
    }

    #[test]
    fn check_kinds() {
        assert!(run(&["usfm", "check", "--kind", "chapter", "GEN.1"]).0);
        assert!(!run(&["usfm", "check", "--kind", "chapter", "GEN.1.1"]).0);
        assert!(run(&["usfm", "check", "--kind", "chapter-or-intro", "GEN.INTRO1"]).0);
        assert!(run(&["usfm", "check", "--kind", "verse", "GEN.1.1"]).0);
        assert!(run(&["usfm", "check", "--kind", "passage", "GEN.1.1-4"]).0);
        assert!(!run(&["usfm", "check", "GEN.1.2-1"]).0);
    }

    #[test]
    fn check_multi_uses_delimiter() {
        assert!(run(&["usfm", "check", "--kind", "multi", "--delimiter", ",", "JAS.1.1,JAS.1.2"]).0);
        assert!(!run(&["usfm", "check", "--kind", "multi", "JAS.1.1,JAS.1.2"]).0);
    }

    #[test]
    fn check_multi_uses_config_delimiter() {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(["usfm", "check", "--kind", "multi", "JAS.1.1;JAS.1.2"]).unwrap();
        let config = CliConfig { multi_delimiter: ";".into(), ..CliConfig::default() };
        let mut out = Vec::new();
        assert!(run_command(cli.command, &config, &mut out).unwrap());
    }

    #[test]
    fn check_json() {
        let (_, out) = run(&["usfm", "--format", "json", "check", "--kind", "chapter-or-intro", "GEN.1.1"]);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["kind"], "chapter-or-intro");
        assert_eq!(value["valid"], false);
    }

    #[test]
    fn expand_single_verses() {
        let (_, out) = run(&["usfm", "expand", "GEN.1.1-3+GEN.1.5"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["GEN.1.1", "GEN.1.2", "GEN.1.3", "GEN.1.5"]);
    }

    #[test]
    fn expand_ranges() {
        let (_, out) = run(&["usfm", "expand", "--ranges", "GEN.1.1-3+GEN.1.5"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["GEN.1.1-3", "GEN.1.5"]);
    }

    #[test]
    fn expand_json() {
        let (_, out) = run(&["usfm", "--format", "json", "expand", "GEN.1.1-2"]);
        let value: Vec<String> = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value, vec!["GEN.1.1", "GEN.1.2"]);
    }

    #[test]
    fn expand_rejects_bad_reference() {
        let cli = Cli::try_parse_from(["usfm", "expand", "GEN"]).unwrap();
        let mut out = Vec::new();
        assert!(run_command(cli.command, &CliConfig::default(), &mut out).is_err());
    }

    #[test]
    fn canon_known_and_unknown() {
        let (ok, out) = run(&["usfm", "canon", "MAT", "ZZZ"]);
        assert!(ok);
        assert!(out.contains("MAT nt"));
        assert!(out.contains("ZZZ ap"));
        assert!(out.contains("unknown book"));
    }

    #[test]
    fn books_filtered_by_canon() {
        let (_, out) = run(&["usfm", "books", "--canon", "nt"]);
        assert!(out.contains("nt (28)"));
        assert!(out.contains("MAT"));
        assert!(!out.contains("GEN"));
    }

    #[test]
    fn books_json_lists_every_code() {
        let (_, out) = run(&["usfm", "--format", "json", "books"]);
        assert_eq!(out.lines().count(), usfm_books::all_books().count());
    }
}
