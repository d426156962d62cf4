use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use crucialy::cli::orchestration::{self, VerifyOutcome};
use crucialy::cli::{Cli, Command};
use crucialy::config::SetupOptions;
use crucialy::ui;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Missing or unknown command: print usage and fail
            e.print().ok();
            process::exit(1);
        }
    };

    match cli.command {
        Command::VerifyCommit { path } => verify_commit(path),
        Command::Setup {
            skip_lint,
            skip_commit_msg,
        } => setup(SetupOptions::resolve(skip_lint, skip_commit_msg)),
    }
}

fn verify_commit(path: Option<std::path::PathBuf>) -> Result<()> {
    let outcome = match orchestration::run_verify_commit(path) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    if outcome == VerifyOutcome::Rejected {
        ui::display_commit_rejection();
    }

    process::exit(outcome.exit_code());
}

fn setup(options: SetupOptions) -> Result<()> {
    ui::display_status("Setting up crucialy git hooks...\n");

    let root = std::env::current_dir()?;
    match orchestration::run_setup(&options, &root) {
        Ok(report) => {
            ui::display_setup_report(&report);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    }
}
