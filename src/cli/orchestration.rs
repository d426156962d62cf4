//! Command workflows
//!
//! Keeps the business logic of each subcommand out of main.rs so it can be
//! called programmatically without depending on clap.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, SetupOptions};
use crate::conventional::{CommitValidator, Verdict};
use crate::domain::CommitMessage;
use crate::error::{CrucialyError, Result};
use crate::hooks::{HookInstaller, SetupReport};

/// Result of `verify-commit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// No message file was given; validation does not apply
    NotApplicable,
    Accepted,
    Rejected,
}

impl VerifyOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            VerifyOutcome::NotApplicable | VerifyOutcome::Accepted => 0,
            VerifyOutcome::Rejected => 1,
        }
    }
}

impl From<Verdict> for VerifyOutcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => VerifyOutcome::Accepted,
            Verdict::Rejected => VerifyOutcome::Rejected,
        }
    }
}

/// Read a commit message file.
pub fn read_message(path: &Path) -> Result<CommitMessage> {
    fs::read_to_string(path)
        .map(CommitMessage::new)
        .map_err(|e| CrucialyError::read_message(path, e))
}

/// Verify the message file named by `path` or, failing that, `GIT_PARAMS`.
///
/// # Returns
/// * `Ok(NotApplicable)` - No path from either source
/// * `Ok(Accepted | Rejected)` - The message was read and checked
/// * `Err(ReadMessage)` - The file could not be read as UTF-8 text
pub fn run_verify_commit(path: Option<PathBuf>) -> Result<VerifyOutcome> {
    let Some(path) = config::resolve_message_path(path) else {
        return Ok(VerifyOutcome::NotApplicable);
    };

    verify_message_file(&path)
}

/// Verify a specific message file.
pub fn verify_message_file(path: &Path) -> Result<VerifyOutcome> {
    let message = read_message(path)?;
    let validator = CommitValidator::new()?;
    Ok(validator.validate_message(&message).into())
}

/// Install hooks and lint config under `root`.
pub fn run_setup(options: &SetupOptions, root: &Path) -> Result<SetupReport> {
    HookInstaller::new(root).run(options)
}
