//! Gantry Tracker - integration with the external issue tracker
//!
//! Read side: the tracker's line-delimited JSON issue store and its CLI
//! configuration. Write side: issue-record allocation and persistence for
//! later import by the tracker.

pub mod config;
pub mod id;
pub mod record;
pub mod store;
pub mod writer;

pub use config::issue_prefix;
pub use id::{IdAllocator, SUFFIX_LEN};
pub use record::{IssueRecord, STATUS_OPEN};
pub use store::IssueStore;
pub use writer::write_records;
