use std::fmt;
use std::str::FromStr;

/// Maximum subject length accepted after the `type(scope): ` header
pub const SUBJECT_MAX_LENGTH: usize = 50;

/// Commit type accepted in the `<type>(<scope>): <subject>` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
    Workflow,
    Types,
    Wip,
    Release,
    Dep,
    Deps,
    Example,
    Examples,
    Merge,
}

impl CommitType {
    /// Every accepted type, in pattern order
    pub const ALL: [CommitType; 20] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Workflow,
        CommitType::Types,
        CommitType::Wip,
        CommitType::Release,
        CommitType::Dep,
        CommitType::Deps,
        CommitType::Example,
        CommitType::Examples,
        CommitType::Merge,
    ];

    /// Get the type identifier as written in a commit header
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Workflow => "workflow",
            CommitType::Types => "types",
            CommitType::Wip => "wip",
            CommitType::Release => "release",
            CommitType::Dep => "dep",
            CommitType::Deps => "deps",
            CommitType::Example => "example",
            CommitType::Examples => "examples",
            CommitType::Merge => "merge",
        }
    }

    /// Short help text for the types listed in the rejection message.
    ///
    /// Less common types are still accepted but carry no description.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            CommitType::Feat => Some("A new feature"),
            CommitType::Fix => Some("A bug fix"),
            CommitType::Chore => Some("Build scripts, tooling or dependencies"),
            CommitType::Docs => Some("Documentation or comments"),
            CommitType::Style => Some("Formatting and style changes"),
            CommitType::Refactor => Some("Code restructuring (no new feature or fix)"),
            CommitType::Perf => Some("Performance improvements"),
            CommitType::Test => Some("Test cases"),
            CommitType::Build => Some("Build system or external dependencies"),
            CommitType::Ci => Some("CI/CD configuration"),
            CommitType::Revert => Some("Revert a previous commit"),
            _ => None,
        }
    }

    /// Types shown in the rejection help, in display order
    pub fn documented() -> [CommitType; 11] {
        [
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Chore,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Revert,
        ]
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown commit type: {}", s))
    }
}

/// Whole-message prefixes that bypass the `type: subject` structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialCommit {
    Merge,
    Revert,
    Version,
}

impl SpecialCommit {
    pub const ALL: [SpecialCommit; 3] = [
        SpecialCommit::Merge,
        SpecialCommit::Revert,
        SpecialCommit::Version,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCommit::Merge => "Merge",
            SpecialCommit::Revert => "Revert",
            SpecialCommit::Version => "Version",
        }
    }
}

impl fmt::Display for SpecialCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
