//! Commit subject classification.
//!
//! Classification is a pure rule cascade over the subject line only: a
//! conventional-commit match wins, then case-insensitive keyword heuristics,
//! then [`Category::Other`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex for the conventional-commit subject form `type(scope)?: rest`
static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>feat|fix|docs|refactor|perf|test|chore|style|build|ci)(?:\((?P<scope>[^)]+)\))?:\s*(?P<rest>.*)$",
    )
    .expect("Invalid regex")
});

/// Keywords marking a feature-ish subject
const FEATURE_KEYWORDS: &[&str] = &["add", "implement", "create", "introduce"];

/// Keywords marking a fix-ish subject
const FIX_KEYWORDS: &[&str] = &["fix", "resolve", "correct", "patch"];

/// Changelog category for a commit.
///
/// Declaration order is the fixed layout order of the draft, so the derived
/// `Ord` must match it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// New functionality
    Features,
    /// Bug fixes
    #[serde(rename = "Bug Fixes")]
    BugFixes,
    /// Documentation changes
    Documentation,
    /// Performance improvements
    Performance,
    /// Refactoring and cleanup
    #[serde(rename = "Code Quality")]
    CodeQuality,
    /// Everything else
    Other,
}

impl Category {
    /// Human-readable section title
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::BugFixes => "Bug Fixes",
            Self::Documentation => "Documentation",
            Self::Performance => "Performance",
            Self::CodeQuality => "Code Quality",
            Self::Other => "Other",
        }
    }

    /// All categories in fixed layout order
    pub fn all() -> [Category; 6] {
        [
            Self::Features,
            Self::BugFixes,
            Self::Documentation,
            Self::Performance,
            Self::CodeQuality,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category plus the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Assigned category
    pub category: Category,
    /// Cleaned message for conventional commits, raw subject otherwise
    pub message: String,
}

/// Classify a commit subject.
pub fn classify(subject: &str) -> Classification {
    if let Some(caps) = CONVENTIONAL_RE.captures(subject) {
        let category = match &caps["type"] {
            "feat" => Category::Features,
            "fix" => Category::BugFixes,
            "docs" => Category::Documentation,
            "perf" => Category::Performance,
            "refactor" => Category::CodeQuality,
            // test, chore, style, build, ci
            _ => Category::Other,
        };
        return Classification {
            category,
            message: caps["rest"].trim().to_string(),
        };
    }

    let lowered = subject.to_lowercase();
    let category = if FEATURE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Category::Features
    } else if FIX_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Category::BugFixes
    } else {
        Category::Other
    };

    // The fallback path keeps the subject untouched
    Classification {
        category,
        message: subject.to_string(),
    }
}
