//! Gantry Git - read-only git queries for release automation
//!
//! Tags, commit subjects, and local identity are fetched through the
//! `CommandRunner` capability so the rest of the system never touches a real
//! process in tests.

pub mod repo;

pub use repo::{GitCli, Identity, FALLBACK_EMAIL, FALLBACK_NAME};
