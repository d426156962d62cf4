use serde::{Serialize, Serializer};

use crate::error::Result;

/// Glob pattern mapped to the commands lint-staged runs on matching files
pub type LintStagedRule = (&'static str, &'static [&'static str]);

/// Default rules covering Vue and React projects
pub const DEFAULT_RULES: &[LintStagedRule] = &[
    (
        "*.{js,ts,jsx,tsx}",
        &["eslint --max-warnings=0 --fix", "prettier --write"],
    ),
    (
        "*.vue",
        &[
            "eslint --max-warnings=0 --fix",
            "stylelint --fix",
            "prettier --write",
        ],
    ),
    ("*.{css,scss,less}", &["stylelint --fix", "prettier --write"]),
    ("*.{json,md,yaml,yml}", &["prettier --write"]),
];

/// Ordered lint-staged configuration.
///
/// Serializes as a JSON object whose keys keep rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintStagedConfig {
    rules: &'static [LintStagedRule],
}

impl Default for LintStagedConfig {
    fn default() -> Self {
        LintStagedConfig {
            rules: DEFAULT_RULES,
        }
    }
}

impl LintStagedConfig {
    pub fn rules(&self) -> &'static [LintStagedRule] {
        self.rules
    }

    /// Pretty JSON with two-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl Serialize for LintStagedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.rules.iter().map(|(glob, commands)| (*glob, *commands)))
    }
}
