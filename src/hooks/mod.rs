//! Git hook installation
//!
//! Writes fixed shell wrappers into `.husky/`:
//! - pre-commit: runs lint-staged on staged files
//! - commit-msg: runs `crucialy verify-commit` on the message file
//!
//! and a default `.lintstagedrc` into the project root.

pub mod installer;
pub mod lifecycle;
pub mod lint_staged;

pub use installer::{HookInstaller, HookStatus, LintConfigStatus, SetupReport};
pub use lifecycle::HookKind;
pub use lint_staged::{LintStagedConfig, DEFAULT_RULES};
