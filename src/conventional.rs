//! Conventional commit header validation.
//!
//! Accepts `<type>(<scope>): <subject>` headers for the fixed type set and
//! whole-message `Merge`/`Revert`/`Version` prefixes. The match is anchored
//! at the start of the message only: once a 1-50 character subject window is
//! found, the rest of the line is not inspected.

use regex::{Regex, RegexBuilder};

use crate::domain::{CommitMessage, CommitType, SpecialCommit, SUBJECT_MAX_LENGTH};
use crate::error::Result;

/// Outcome of validating a commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Build the header pattern source from the commit vocabulary.
pub fn build_pattern() -> String {
    let types: Vec<&str> = CommitType::ALL.iter().map(|t| t.as_str()).collect();
    let specials: Vec<&str> = SpecialCommit::ALL.iter().map(|s| s.as_str()).collect();

    format!(
        r"^(({})(\(.+\))?:|{}) .{{1,{}}}",
        types.join("|"),
        specials.join("|"),
        SUBJECT_MAX_LENGTH
    )
}

/// Compiled commit header validator.
///
/// Construct once per process and reuse for every message.
#[derive(Debug, Clone)]
pub struct CommitValidator {
    pattern: Regex,
}

impl CommitValidator {
    pub fn new() -> Result<Self> {
        let pattern = RegexBuilder::new(&build_pattern())
            .case_insensitive(true)
            .crlf(true)
            .build()?;
        Ok(CommitValidator { pattern })
    }

    /// Source of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Validate text that has already been normalized.
    pub fn validate(&self, normalized: &str) -> Verdict {
        if self.pattern.is_match(normalized) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    /// Normalize a raw message and validate it.
    pub fn validate_message(&self, message: &CommitMessage) -> Verdict {
        self.validate(&message.normalized())
    }
}
