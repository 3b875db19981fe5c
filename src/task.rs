//! Backlog task parsing and branch naming.

/// Namespace prefix for every task branch.
pub const BRANCH_PREFIX: &str = "ai-dev/";

/// Maximum slug length (excluding the namespace prefix).
const SLUG_MAX_LEN: usize = 50;

/// One parsed backlog entry: a target file and an instruction.
///
/// Immutable once parsed; `raw_line` keeps the original text for logging
/// and pull-request provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Relative path of the file to edit, never empty.
    pub target_path: String,
    /// Free-text change instruction, never empty.
    pub instruction: String,
    /// The backlog line this task was parsed from.
    pub raw_line: String,
}

impl Task {
    /// Parses one backlog line into a task.
    ///
    /// The line must contain a backtick-delimited file path followed by
    /// `", "` and the instruction; anything before the first backtick is
    /// ignored. Returns `None` for anything that does not match, including
    /// an empty path or empty instruction — malformed lines are expected
    /// backlog noise, not errors.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let open = line.find('`')?;
        let rest = &line[open + 1..];
        let close = rest.find('`')?;
        let target_path = rest[..close].trim();
        let instruction = rest[close + 1..].strip_prefix(", ")?.trim();
        if target_path.is_empty() || instruction.is_empty() {
            return None;
        }
        Some(Self {
            target_path: target_path.to_string(),
            instruction: instruction.to_string(),
            raw_line: line.to_string(),
        })
    }

    /// The branch name for this task: `ai-dev/` plus the instruction slug.
    #[must_use]
    pub fn branch_name(&self) -> String {
        format!("{BRANCH_PREFIX}{}", branch_slug(&self.instruction))
    }
}

/// Derives a branch slug from an instruction.
///
/// Lowercases the text, collapses every run of non-alphanumeric characters
/// to a single `-`, trims separators from both ends, and caps the result at
/// 50 characters (re-trimmed so the slug never ends in a separator).
/// Deterministic: identical instructions produce identical slugs.
#[must_use]
pub fn branch_slug(instruction: &str) -> String {
    let mut slug = String::new();
    let mut pending_separator = false;
    for ch in instruction.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    if slug.len() > SLUG_MAX_LEN {
        slug.truncate(SLUG_MAX_LEN);
    }
    slug.trim_end_matches('-').to_string()
}
