//! Issue identifier allocation.
//!
//! Ids look like `bd-x7k`: the tracker prefix plus a 3-character suffix drawn
//! from lowercase alphanumerics. Uniqueness is not checked; with 36^3
//! combinations per prefix collisions are possible but statistically rare,
//! and the tracker itself is the authority on id conflicts.

use rand::Rng;

/// Suffix alphabet: lowercase alphanumerics
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Suffix length in characters
pub const SUFFIX_LEN: usize = 3;

/// Allocates tracker-style issue ids under a fixed prefix.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
}

impl IdAllocator {
    /// Create an allocator for the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix this allocator stamps on every id
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocate a fresh id. No collision check.
    pub fn allocate(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        format!("{}-{}", self.prefix, suffix)
    }
}
