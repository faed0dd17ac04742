//! Read-only access to the tracker's issue store.
//!
//! The store is a line-delimited JSON file, one issue object per line, with
//! at least `id` and `title` fields. A missing file, a malformed line, or an
//! absent key all degrade to "no title found".

use std::path::PathBuf;

use tracing::debug;

/// The tracker's on-disk issue store.
#[derive(Debug, Clone)]
pub struct IssueStore {
    path: PathBuf,
}

impl IssueStore {
    /// Create a handle to the store file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Look up the human title for a full issue id (e.g. `bd-a3f`).
    pub fn title_for(&self, full_id: &str) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "issue store unreadable");
                return None;
            }
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Malformed lines are skipped, not fatal
            let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
                continue;
            };
            if value.get("id").and_then(|v| v.as_str()) == Some(full_id) {
                return value
                    .get("title")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(content: &str) -> (TempDir, IssueStore) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("issues.jsonl");
        std::fs::write(&path, content).unwrap();
        (temp, IssueStore::new(path))
    }

    #[test]
    fn test_title_lookup() {
        let (_temp, store) = store_with(
            "{\"id\":\"bd-a1\",\"title\":\"First issue\"}\n{\"id\":\"bd-b2\",\"title\":\"Second\"}\n",
        );
        assert_eq!(store.title_for("bd-b2").as_deref(), Some("Second"));
        assert_eq!(store.title_for("bd-zz"), None);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (_temp, store) =
            store_with("not json at all\n\n{\"id\":\"bd-a1\",\"title\":\"Recovered\"}\n");
        assert_eq!(store.title_for("bd-a1").as_deref(), Some("Recovered"));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = IssueStore::new(temp.path().join("absent.jsonl"));
        assert_eq!(store.title_for("bd-a1"), None);
    }

    #[test]
    fn test_line_without_title_field() {
        let (_temp, store) = store_with("{\"id\":\"bd-a1\"}\n");
        assert_eq!(store.title_for("bd-a1"), None);
    }
}
