/// Raw commit message as read from the message file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
}

impl CommitMessage {
    pub fn new(raw: impl Into<String>) -> Self {
        CommitMessage { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trim the whole text, then drop comment lines.
    pub fn normalized(&self) -> String {
        strip_comments(self.raw.trim())
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Remove every line starting with `#`.
///
/// A removed line takes all line breaks that follow it, so stripping never
/// leaves blank lines behind. `\r` and `\n` both end a line.
pub fn strip_comments(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let line_end = rest.find(is_line_break).unwrap_or(rest.len());

        if rest.starts_with('#') {
            rest = rest[line_end..].trim_start_matches(is_line_break);
        } else {
            // Keep the line and its single terminator; the next char starts a new line.
            let keep = if line_end < rest.len() {
                line_end + 1
            } else {
                line_end
            };
            stripped.push_str(&rest[..keep]);
            rest = &rest[keep..];
        }
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_comments() {
        let text = "# Please enter the commit message\n# Lines starting with '#'\nfeat: add login";
        assert_eq!(strip_comments(text), "feat: add login");
    }

    #[test]
    fn test_strip_consumes_trailing_blank_lines() {
        assert_eq!(strip_comments("#comment\n\n\nfix: typo"), "fix: typo");
    }

    #[test]
    fn test_strip_keeps_body_lines() {
        let text = "feat: add login\n\nbody line\n# trailing comment\nmore body";
        assert_eq!(
            strip_comments(text),
            "feat: add login\n\nbody line\nmore body"
        );
    }

    #[test]
    fn test_strip_crlf() {
        assert_eq!(strip_comments("# c\r\nfeat: x\r\n# d\r\n"), "feat: x\r\n");
    }

    #[test]
    fn test_hash_not_at_line_start_is_kept() {
        assert_eq!(strip_comments("fix: issue #42"), "fix: issue #42");
        assert_eq!(strip_comments(" # indented"), " # indented");
    }

    #[test]
    fn test_normalized_leaves_raw_untouched() {
        let message = CommitMessage::new("# c\nfeat: x\n");
        assert_eq!(message.normalized(), "feat: x");
        assert_eq!(message.raw(), "# c\nfeat: x\n");
    }

    #[test]
    fn test_only_comments_normalize_to_empty() {
        let message = CommitMessage::new("# one\n# two\n#three\n");
        assert_eq!(message.normalized(), "");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let samples = [
            "# a\nfeat: x\n# b\n\nbody",
            "#\n#\n\n#x\r\n\r\nfix: y",
            "plain text",
            "",
            "a\n#b\n#c",
        ];

        for sample in samples {
            let once = strip_comments(sample);
            assert_eq!(strip_comments(&once), once, "sample: {:?}", sample);
        }
    }

    #[test]
    fn test_normalized_trims_before_stripping() {
        let message = CommitMessage::new("\n\n  # comment\nfeat: x\n\n");
        // Trimming exposes the comment at position 0
        assert_eq!(message.normalized(), "feat: x");
    }
}
