//! Sequence alignment
//!
//! This module produces edit scripts over any two slices of comparable
//! elements. It is used once over normalized line keys and once over token
//! values within a pair of replaced lines:
//!
//! - `operation`: Edit script entries and the builder that coalesces moves
//! - `myers`: Myers' shortest edit script with a bounded trace
//! - `positional`: Index-aligned comparator used when Myers gives up

pub mod myers;
pub mod operation;
pub mod positional;

use crate::artifacts::diff::myers::{AlignError, DiffAlgorithm, MyersDiff};
use crate::artifacts::diff::operation::Operation;
use crate::artifacts::diff::positional::positional_operations;

/// Which comparator produced an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignStrategy {
    Myers,
    Positional,
}

/// Attempts a minimal alignment of `a` and `b`.
pub fn align<T: Eq>(a: &[T], b: &[T], max_trace_cells: usize) -> Result<Vec<Operation>, AlignError> {
    MyersDiff::new(a, b)
        .with_max_trace_cells(max_trace_cells)
        .operations()
}

/// Aligns `a` and `b`, degrading to the positional comparator when the
/// minimal alignment cannot be computed within `max_trace_cells`.
pub fn align_or_fallback<T: Eq>(
    a: &[T],
    b: &[T],
    max_trace_cells: usize,
) -> (Vec<Operation>, AlignStrategy) {
    match align(a, b, max_trace_cells) {
        Ok(ops) => (ops, AlignStrategy::Myers),
        Err(AlignError::CostExceeded { limit }) => {
            tracing::warn!(
                left = a.len(),
                right = b.len(),
                limit,
                "minimal alignment too expensive, comparing by position"
            );
            (positional_operations(a, b), AlignStrategy::Positional)
        }
    }
}
