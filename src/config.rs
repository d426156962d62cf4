use std::env;
use std::path::PathBuf;

/// Directory (relative to the project root) that holds the hook scripts
pub const HOOKS_DIR: &str = ".husky";

/// lint-staged configuration file written to the project root
pub const LINT_STAGED_FILE: &str = ".lintstagedrc";

pub const SKIP_LINT_ENV: &str = "SKIP_LINT";
pub const SKIP_COMMIT_MSG_ENV: &str = "SKIP_COMMIT_MSG";

/// Alternate source for the commit message file path
pub const GIT_PARAMS_ENV: &str = "GIT_PARAMS";

/// Options controlling which hooks `setup` installs.
///
/// Each flag is set either on the command line or by its environment
/// variable holding exactly `"true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetupOptions {
    pub skip_lint: bool,
    pub skip_commit_msg: bool,
}

impl SetupOptions {
    /// Combine CLI flags with `SKIP_LINT` / `SKIP_COMMIT_MSG` from the process environment.
    pub fn resolve(cli_skip_lint: bool, cli_skip_commit_msg: bool) -> Self {
        Self::resolve_with(cli_skip_lint, cli_skip_commit_msg, |key| env::var(key).ok())
    }

    /// Same as [`SetupOptions::resolve`] with an injectable environment lookup.
    pub fn resolve_with<F>(cli_skip_lint: bool, cli_skip_commit_msg: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_true = |key: &str| lookup(key).as_deref() == Some("true");

        SetupOptions {
            skip_lint: cli_skip_lint || is_true(SKIP_LINT_ENV),
            skip_commit_msg: cli_skip_commit_msg || is_true(SKIP_COMMIT_MSG_ENV),
        }
    }

    /// True when every hook is skipped and setup has nothing to do
    pub fn all_skipped(&self) -> bool {
        self.skip_lint && self.skip_commit_msg
    }
}

/// Resolve the commit message file from the positional argument or `GIT_PARAMS`.
///
/// Empty values count as absent. `None` means validation does not apply.
pub fn resolve_message_path(arg: Option<PathBuf>) -> Option<PathBuf> {
    resolve_message_path_with(arg, |key| env::var_os(key).map(PathBuf::from))
}

pub fn resolve_message_path_with<F>(arg: Option<PathBuf>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    arg.filter(|p| !p.as_os_str().is_empty())
        .or_else(|| lookup(GIT_PARAMS_ENV).filter(|p| !p.as_os_str().is_empty()))
}
