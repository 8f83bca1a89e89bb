use crate::artifacts::diff::operation::{OpKind, Operation};

/// Index-aligned comparison used when the Myers trace would grow too large.
///
/// Walks both sequences in lockstep: matching positions extend an `Equal`
/// run, mismatching positions become single-element `Replace`s, and the
/// tail of the longer sequence becomes one `Delete` or `Insert`. Always
/// terminates in `O(max(n, m))`.
pub fn positional_operations<T: Eq>(a: &[T], b: &[T]) -> Vec<Operation> {
    let common = a.len().min(b.len());
    let mut ops: Vec<Operation> = Vec::new();

    for idx in 0..common {
        if a[idx] == b[idx] {
            match ops.last_mut() {
                Some(last) if last.kind == OpKind::Equal => {
                    last.source.end = idx + 1;
                    last.target.end = idx + 1;
                }
                _ => ops.push(Operation::equal(idx..idx + 1, idx..idx + 1)),
            }
        } else {
            ops.push(Operation::new(OpKind::Replace, idx..idx + 1, idx..idx + 1));
        }
    }

    ops.extend(Operation::change(common..a.len(), common..b.len()));
    ops
}
