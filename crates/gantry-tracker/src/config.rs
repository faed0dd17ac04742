//! Tracker CLI configuration probe.

use gantry_core::process::CommandRunner;
use tracing::debug;

/// Ask the tracker CLI for its configured issue prefix.
///
/// A missing CLI, a non-zero exit, or output that is not a lowercase
/// alphanumeric token all fall back to `default`.
pub fn issue_prefix<R: CommandRunner>(runner: &R, cli: &str, default: &str) -> String {
    if let Some(stdout) = runner.capture(cli, &["config", "get", "issue_prefix"]) {
        let candidate = stdout.trim();
        if is_well_formed_prefix(candidate) {
            debug!(prefix = candidate, "tracker reported issue prefix");
            return candidate.to_string();
        }
        debug!(output = candidate, "tracker prefix output malformed, using default");
    }
    default.to_string()
}

/// A prefix is a non-empty lowercase alphanumeric token starting with a letter.
fn is_well_formed_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::process::testing::FakeRunner;

    #[test]
    fn test_prefix_from_cli() {
        let runner = FakeRunner::new().on_success("bd config get issue_prefix", "tmpl\n");
        assert_eq!(issue_prefix(&runner, "bd", "bd"), "tmpl");
    }

    #[test]
    fn test_default_when_cli_missing() {
        let runner = FakeRunner::new();
        assert_eq!(issue_prefix(&runner, "bd", "bd"), "bd");
    }

    #[test]
    fn test_default_when_output_malformed() {
        let runner =
            FakeRunner::new().on_success("bd config get issue_prefix", "Error: no config\n");
        assert_eq!(issue_prefix(&runner, "bd", "bd"), "bd");
    }

    #[test]
    fn test_default_when_cli_fails() {
        let runner = FakeRunner::new().on_failure("bd config get issue_prefix");
        assert_eq!(issue_prefix(&runner, "bd", "bd"), "bd");
    }
}
