//! Tracker-reference extraction from commit subjects.

use regex::Regex;

/// Extracts tracker issue references from commit subjects.
///
/// Two patterns are tried in order: a parenthetical `(bd-x7k)` anywhere in
/// the subject, then `Closes bd-x7k` (case-insensitive). The parenthetical
/// form is the tie-break when both would match.
#[derive(Debug)]
pub struct ReferenceExtractor {
    prefix: String,
    parenthetical: Regex,
    closes: Regex,
}

impl ReferenceExtractor {
    /// Build an extractor for the given issue prefix.
    pub fn new(prefix: &str) -> Self {
        let escaped = regex::escape(prefix);
        let parenthetical = Regex::new(&format!(r"(?i)\({escaped}-([a-z0-9]+)\)"))
            .expect("Invalid regex");
        let closes =
            Regex::new(&format!(r"(?i)closes\s+{escaped}-([a-z0-9]+)")).expect("Invalid regex");
        Self {
            prefix: prefix.to_string(),
            parenthetical,
            closes,
        }
    }

    /// The issue prefix this extractor matches against
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract the referenced id (lowercased), if any.
    pub fn extract(&self, subject: &str) -> Option<String> {
        self.parenthetical
            .captures(subject)
            .or_else(|| self.closes.captures(subject))
            .map(|caps| caps[1].to_lowercase())
    }

    /// Full store key for an extracted id, e.g. `bd-x7k`.
    pub fn full_id(&self, id: &str) -> String {
        format!("{}-{}", self.prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthetical_anywhere() {
        let extractor = ReferenceExtractor::new("bd");
        assert_eq!(
            extractor.extract("fix: align header (bd-xyz)").as_deref(),
            Some("xyz")
        );
        assert_eq!(
            extractor.extract("(bd-a1) leading reference").as_deref(),
            Some("a1")
        );
    }

    #[test]
    fn test_closes_form() {
        let extractor = ReferenceExtractor::new("bd");
        assert_eq!(
            extractor.extract("feat: exporter, closes bd-k2m").as_deref(),
            Some("k2m")
        );
        assert_eq!(
            extractor.extract("Closes BD-K2M at last").as_deref(),
            Some("k2m")
        );
    }

    #[test]
    fn test_parenthetical_wins_over_closes() {
        let extractor = ReferenceExtractor::new("bd");
        assert_eq!(
            extractor
                .extract("fix thing (bd-abc), closes bd-def")
                .as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_no_reference() {
        let extractor = ReferenceExtractor::new("bd");
        assert_eq!(extractor.extract("fix: plain subject"), None);
        // Wrong prefix does not match
        assert_eq!(extractor.extract("see (xx-abc)"), None);
    }

    #[test]
    fn test_extracted_id_is_lowercased() {
        let extractor = ReferenceExtractor::new("bd");
        assert_eq!(extractor.extract("(BD-A3F)").as_deref(), Some("a3f"));
    }

    #[test]
    fn test_full_id() {
        let extractor = ReferenceExtractor::new("tmpl");
        assert_eq!(extractor.full_id("a3f"), "tmpl-a3f");
    }
}
