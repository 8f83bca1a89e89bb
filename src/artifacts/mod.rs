//! Comparison data structures and algorithms
//!
//! This module contains the pure building blocks of a comparison:
//!
//! - `comparison`: Display rows, the result type and the row assembler
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Edit scripts, Myers' alignment and the positional fallback
//! - `highlight`: Intra-line highlight spans and their merging
//! - `normalize`: Comparison keys (ignore-patterns, whitespace folding)
//! - `tokens`: Tokenizers and the extension/language registry

pub mod comparison;
pub mod core;
pub mod diff;
pub mod highlight;
pub mod normalize;
pub mod tokens;
