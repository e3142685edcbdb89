//! Report formatting and printing utilities.
//!
//! Kept apart from the core operations so locsync can be used as a library.
//! Every printer has a `_to` variant writing to any `io::Write`.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    AuditEntry, AuditOutcome, AuditReport, Completeness, LanguageMerge, MergeSummary,
    StoreErrorKind, SyncSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for files that a sync changes.
pub const CHANGE_MARK: &str = "~";

const RULE_WIDTH: usize = 80;
const CODE_WIDTH: usize = 6;
const NAME_WIDTH: usize = 20;

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let shown = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(shown)))
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge_total_to(summary, &mut stdout),
        CommandSummary::Audit(report) => print_audit_to(report, &mut stdout),
        CommandSummary::Sync(summary) => {
            print_sync_to(summary, verbose, &mut stdout);
            print_sync_warnings_to(summary, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// merge
// ============================================================

/// Print the progress line for one merged language.
pub fn print_language_merge(merged: &LanguageMerge) {
    print_language_merge_to(merged, &mut io::stdout().lock());
}

pub fn print_language_merge_to<W: Write>(merged: &LanguageMerge, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Added {} translations to {}",
        merged.supplied,
        merged.code.bold()
    );
}

pub fn print_merge_total_to<W: Write>(summary: &MergeSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\nTotal translations added: {}",
        summary.total_supplied()
    );
}

// ============================================================
// audit
// ============================================================

pub fn print_audit_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(writer, "Translation Verification Report");
    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(writer);

    for entry in &report.entries {
        print_audit_entry(entry, writer);
        let _ = writeln!(writer);
    }

    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(
        writer,
        "Summary: {}/{} languages complete, {} incomplete",
        report.complete_count(),
        report.roster_size(),
        report.incomplete_count()
    );
    let _ = writeln!(writer, "{}", rule);
}

fn print_audit_entry<W: Write>(entry: &AuditEntry, writer: &mut W) {
    let code = pad(&entry.language.code, CODE_WIDTH);
    let name = pad(&entry.language.name, NAME_WIDTH);

    match &entry.outcome {
        AuditOutcome::Counted {
            counts,
            total,
            status,
        } => {
            let status = match status {
                Completeness::Complete => "[OK]".green(),
                Completeness::Incomplete => "[INCOMPLETE]".yellow(),
            };
            let _ = writeln!(writer, "{} {} ({}): {:3} keys", status, code, name, total);

            let breakdown = counts
                .iter()
                .map(|c| format!("{}: {:2}", c.label, c.count))
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(writer, "        {}", breakdown.dimmed());
        }
        AuditOutcome::Failed { kind, message } => {
            let reason = match kind {
                StoreErrorKind::MissingFile => "File not found".to_string(),
                StoreErrorKind::MalformedJson => format!("JSON error - {}", message),
                StoreErrorKind::Io => format!("Read error - {}", message),
            };
            let _ = writeln!(writer, "{} {} ({}): {}", "[ERR]".red(), code, name, reason);
        }
    }
}

// ============================================================
// sync
// ============================================================

pub fn print_sync_to<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Master {}: {} {}",
        summary.master_file,
        summary.master_key_count,
        plural(summary.master_key_count, "key", "keys")
    );

    for file in &summary.files {
        if file.is_in_sync() {
            let _ = writeln!(
                writer,
                "  {} {}: in sync",
                SUCCESS_MARK.green(),
                file.file_name
            );
            continue;
        }
        let _ = writeln!(
            writer,
            "  {} {}: +{} added, -{} removed",
            CHANGE_MARK.yellow(),
            file.file_name,
            file.added.len(),
            file.removed.len()
        );
        if verbose {
            for key in &file.added {
                let _ = writeln!(writer, "      {} {}", "+".green(), key);
            }
            for key in &file.removed {
                let _ = writeln!(writer, "      {} {}", "-".red(), key);
            }
        }
    }

    let file_count = summary.files.len();
    let changed = summary.changed_files();
    let _ = writeln!(writer);
    if changed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {} already in sync",
                file_count,
                plural(file_count, "file", "files")
            )
            .green()
        );
        return;
    }

    let verb = if summary.is_apply {
        "Synced".green().bold()
    } else {
        "Would sync".yellow().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} of {} {}: +{} added, -{} removed",
        verb,
        changed,
        file_count,
        plural(file_count, "file", "files"),
        summary.total_added(),
        summary.total_removed()
    );
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
    }
}

pub fn print_sync_warnings_to<W: Write>(summary: &SyncSummary, writer: &mut W) {
    for key in &summary.unknown_keys {
        let _ = writeln!(
            writer,
            "{} key {} not found in {}",
            "warning:".bold().yellow(),
            key,
            summary.master_file
        );
    }
    for skipped in &summary.skipped {
        let _ = writeln!(
            writer,
            "{} skipped {}: {}",
            "warning:".bold().yellow(),
            skipped.file_name,
            skipped.reason
        );
    }
}

// ============================================================
// init
// ============================================================

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
