//! Comparison results
//!
//! - `display_line`: Rows tagged equal/added/removed with dual line numbers
//! - `assembler`: Turns a line-level edit script into rows
//! - `filter`: Line type filter for consumers that show a subset of rows
//! - `result`: The immutable result with statistics and navigation helpers

pub mod assembler;
pub mod display_line;
pub mod filter;
pub mod result;
