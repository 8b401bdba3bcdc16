//! Command implementations for the ngscope CLI.
//!
//! - [`analyze`] - Walk a project and write its overview report
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod analyze;

pub use analyze::execute as analyze_execute;
