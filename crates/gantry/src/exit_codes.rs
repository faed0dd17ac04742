//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error (missing version literal, unreadable plan file)
pub const CONFIG_ERROR: i32 = 2;

/// Plan file contained no recognized items; nothing was converted
pub const EMPTY_PLAN: i32 = 3;
