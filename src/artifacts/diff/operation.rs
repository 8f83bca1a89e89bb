use derive_new::new;
use std::fmt::Display;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl OpKind {
    pub fn tag(&self) -> char {
        match self {
            OpKind::Equal => 'e',
            OpKind::Insert => 'i',
            OpKind::Delete => 'd',
            OpKind::Replace => 'r',
        }
    }
}

/// One entry of an edit script.
///
/// `source` indexes the first sequence and `target` the second. A script
/// is a contiguous run of these whose ranges partition both sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Operation {
    pub kind: OpKind,
    pub source: Range<usize>,
    pub target: Range<usize>,
}

impl Operation {
    pub fn equal(source: Range<usize>, target: Range<usize>) -> Self {
        Self::new(OpKind::Equal, source, target)
    }

    /// Classifies a non-equal region by which of its sides is empty.
    ///
    /// Returns `None` when both sides are empty.
    pub fn change(source: Range<usize>, target: Range<usize>) -> Option<Self> {
        let kind = match (source.is_empty(), target.is_empty()) {
            (true, true) => return None,
            (false, true) => OpKind::Delete,
            (true, false) => OpKind::Insert,
            (false, false) => OpKind::Replace,
        };

        Some(Self::new(kind, source, target))
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} a[{}..{}] b[{}..{}]",
            self.kind.tag(),
            self.source.start,
            self.source.end,
            self.target.start,
            self.target.end
        )
    }
}

/// Accumulates unit moves into a coalesced edit script.
///
/// Runs of matches become one `Equal`; every maximal run of deletions and
/// insertions between two matches becomes one `Delete`, `Insert` or
/// `Replace`.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    ops: Vec<Operation>,
    start: (usize, usize),
    cursor: (usize, usize),
    in_change: bool,
}

impl ScriptBuilder {
    pub fn keep(&mut self) {
        if self.in_change {
            self.flush();
        }
        self.in_change = false;
        self.cursor = (self.cursor.0 + 1, self.cursor.1 + 1);
    }

    pub fn delete(&mut self) {
        self.enter_change();
        self.cursor.0 += 1;
    }

    pub fn insert(&mut self) {
        self.enter_change();
        self.cursor.1 += 1;
    }

    pub fn finish(mut self) -> Vec<Operation> {
        self.flush();
        self.ops
    }

    fn enter_change(&mut self) {
        if !self.in_change {
            self.flush();
        }
        self.in_change = true;
    }

    fn flush(&mut self) {
        let source = self.start.0..self.cursor.0;
        let target = self.start.1..self.cursor.1;

        if self.in_change {
            self.ops.extend(Operation::change(source, target));
        } else if !source.is_empty() {
            self.ops.push(Operation::equal(source, target));
        }
        self.start = self.cursor;
    }
}

/// Checks that `ops` are ascending, contiguous and cover `[0, len_a)` and
/// `[0, len_b)` exactly.
pub fn is_partition(ops: &[Operation], len_a: usize, len_b: usize) -> bool {
    let (mut i, mut j) = (0, 0);

    for op in ops {
        if op.source.start != i || op.target.start != j {
            return false;
        }
        if op.source.end < op.source.start || op.target.end < op.target.start {
            return false;
        }

        let consistent = match op.kind {
            OpKind::Equal => op.source_len() == op.target_len() && !op.source.is_empty(),
            OpKind::Delete => !op.source.is_empty() && op.target.is_empty(),
            OpKind::Insert => op.source.is_empty() && !op.target.is_empty(),
            OpKind::Replace => !op.source.is_empty() && !op.target.is_empty(),
        };
        if !consistent {
            return false;
        }

        (i, j) = (op.source.end, op.target.end);
    }

    i == len_a && j == len_b
}
