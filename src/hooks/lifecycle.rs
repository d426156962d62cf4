use crate::config::SetupOptions;

/// Git hooks crucialy installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    PreCommit,
    CommitMsg,
}

const PRE_COMMIT_SCRIPT: &str = "#!/usr/bin/env sh
npx --no-install lint-staged --quiet
";

const COMMIT_MSG_SCRIPT: &str = "#!/usr/bin/env sh
crucialy verify-commit \"$1\"
";

impl HookKind {
    pub const ALL: [HookKind; 2] = [HookKind::PreCommit, HookKind::CommitMsg];

    /// Get the hook file name as git expects it
    pub fn name(&self) -> &'static str {
        match self {
            HookKind::PreCommit => "pre-commit",
            HookKind::CommitMsg => "commit-msg",
        }
    }

    /// Fixed script body written to the hook file
    pub fn script(&self) -> &'static str {
        match self {
            HookKind::PreCommit => PRE_COMMIT_SCRIPT,
            HookKind::CommitMsg => COMMIT_MSG_SCRIPT,
        }
    }

    /// Hooks not disabled by `options`, in install order
    pub fn enabled(options: &SetupOptions) -> Vec<HookKind> {
        HookKind::ALL
            .into_iter()
            .filter(|hook| match hook {
                HookKind::PreCommit => !options.skip_lint,
                HookKind::CommitMsg => !options.skip_commit_msg,
            })
            .collect()
    }
}
