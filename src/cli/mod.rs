//! Command line surface: argument parsing and command orchestration

pub mod orchestration;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "crucialy",
    version,
    about = "Install git hooks and verify conventional commit messages",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Setup git hooks
    Setup {
        #[arg(long, help = "Do not install the pre-commit hook or .lintstagedrc (env: SKIP_LINT=true)")]
        skip_lint: bool,

        #[arg(long, help = "Do not install the commit-msg hook (env: SKIP_COMMIT_MSG=true)")]
        skip_commit_msg: bool,
    },

    /// Verify commit message format
    VerifyCommit {
        #[arg(help = "Commit message file (falls back to GIT_PARAMS)")]
        path: Option<PathBuf>,
    },
}
