//! Gantry Plan - plan document to issue records
//!
//! Parses the constrained plan markdown grammar into a flat ordered item list
//! with implicit parent linkage, then builds one tracker issue record per
//! item.

pub mod convert;
pub mod parser;

pub use convert::{build_description, build_records, Author};
pub use parser::{parse_plan, ItemType, PlanItem, DEFAULT_PRIORITY};
