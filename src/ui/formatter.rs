//! Pure formatting functions for UI output.
//!
//! `format_*` functions build text without side effects so they can be
//! tested; `display_*` functions print it. Colours come from `console` and
//! are dropped automatically when the stream is not a terminal.

use console::style;

use crate::config::{HOOKS_DIR, LINT_STAGED_FILE};
use crate::domain::CommitType;
use crate::hooks::{HookStatus, LintConfigStatus, SetupReport};

/// Example messages shown when a commit message is rejected
pub const EXAMPLE_MESSAGES: [&str; 4] = [
    "feat: 新增功能",
    "fix(lint): 修复配置问题",
    "chore: 更新依赖版本",
    "Merge branch 'main' into dev",
];

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    println!("{} {}", style("⚠").yellow(), message);
}

/// Build the diagnostic printed when a commit message does not match.
///
/// Lists the expected header grammar, the documented commit types with
/// their descriptions, and literal examples of valid messages.
pub fn format_commit_rejection() -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "  {} {}",
            style(" ERROR ").white().on_red().for_stderr(),
            style("Commit message does not follow the conventional format")
                .red()
                .for_stderr()
        ),
        String::new(),
        format!(
            "  {} <type>(<scope>): <subject>",
            style("Expected format:").red().for_stderr()
        ),
        String::new(),
        format!("  {}", style("Types:").yellow().for_stderr()),
    ];

    for commit_type in CommitType::documented() {
        if let Some(description) = commit_type.description() {
            lines.push(format!("    {:<9} {}", commit_type.as_str(), description));
        }
    }

    lines.push(String::new());
    lines.push(format!("  {}", style("Examples:").yellow().for_stderr()));
    for example in EXAMPLE_MESSAGES {
        lines.push(format!("    {}", style(example).green().for_stderr()));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Print the commit rejection diagnostic to stderr.
pub fn display_commit_rejection() {
    eprintln!("{}", format_commit_rejection());
}

/// Describe each action taken by a setup run, one line per action.
///
/// Lines are returned unstyled; [`display_setup_report`] adds the markers.
pub fn format_setup_report(report: &SetupReport) -> Vec<(ReportLine, String)> {
    if report.nothing_to_do {
        return vec![(
            ReportLine::Warning,
            "All hooks are disabled. Nothing to setup.".to_string(),
        )];
    }

    let mut lines = Vec::new();

    if report.created_hooks_dir {
        lines.push((ReportLine::Success, format!("Created {} directory", HOOKS_DIR)));
    }

    for (hook, status) in &report.hooks {
        if *status == HookStatus::Installed {
            lines.push((
                ReportLine::Success,
                format!("Installed {}/{}", HOOKS_DIR, hook.name()),
            ));
        }
    }

    match report.lint_config {
        LintConfigStatus::Installed => {
            lines.push((ReportLine::Success, format!("Installed {}", LINT_STAGED_FILE)))
        }
        LintConfigStatus::AlreadyExists => lines.push((
            ReportLine::Warning,
            format!("{} already exists, skipping", LINT_STAGED_FILE),
        )),
        LintConfigStatus::Skipped => {}
    }

    if report.changed() {
        lines.push((ReportLine::Blank, String::new()));
        lines.push((ReportLine::Success, "crucialy git hooks setup complete!".to_string()));
        if report.options.skip_lint {
            lines.push((ReportLine::Note, "(lint-staged disabled)".to_string()));
        }
        if report.options.skip_commit_msg {
            lines.push((
                ReportLine::Note,
                "(commit-msg verification disabled)".to_string(),
            ));
        }
    } else {
        lines.push((ReportLine::Blank, String::new()));
        lines.push((ReportLine::Success, "All files are up to date.".to_string()));
    }

    lines
}

/// Kind of line in a setup report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine {
    Success,
    Warning,
    Note,
    Blank,
}

/// Print a setup report to stdout.
pub fn display_setup_report(report: &SetupReport) {
    for (kind, text) in format_setup_report(report) {
        match kind {
            ReportLine::Success => display_success(&text),
            ReportLine::Warning => display_warning(&text),
            ReportLine::Note => println!("  {}", text),
            ReportLine::Blank => println!(),
        }
    }
}
