use crate::artifacts::comparison::display_line::DisplayLine;
use crate::artifacts::diff::operation::{OpKind, Operation};
use crate::artifacts::highlight::{Highlight, highlight_pair};
use crate::artifacts::tokens::Tokenizer;
use std::ops::Range;

/// Walks a line-level edit script and emits display rows.
///
/// Replace blocks are paired index by index; each pair gets token-level
/// highlights and is emitted removed-then-added. Lines left over on the
/// longer side are emitted fully highlighted.
pub struct Assembler<'c> {
    lines1: &'c [String],
    lines2: &'c [String],
    tokenizer: &'c dyn Tokenizer,
    max_trace_cells: usize,
    rows: Vec<DisplayLine>,
    line_no1: usize,
    line_no2: usize,
}

impl<'c> Assembler<'c> {
    pub fn new(
        lines1: &'c [String],
        lines2: &'c [String],
        tokenizer: &'c dyn Tokenizer,
        max_trace_cells: usize,
    ) -> Self {
        Self {
            lines1,
            lines2,
            tokenizer,
            max_trace_cells,
            rows: Vec::with_capacity(lines1.len().max(lines2.len())),
            line_no1: 1,
            line_no2: 1,
        }
    }

    pub fn assemble(mut self, ops: &[Operation]) -> Vec<DisplayLine> {
        for op in ops {
            match op.kind {
                OpKind::Equal => self.equal(op.source.clone()),
                OpKind::Delete => self.removed(op.source.clone()),
                OpKind::Insert => self.added(op.target.clone()),
                OpKind::Replace => self.replace(op.source.clone(), op.target.clone()),
            }
        }

        self.rows
    }

    fn equal(&mut self, source: Range<usize>) {
        for i in source {
            self.rows
                .push(DisplayLine::equal(&self.lines1[i], self.line_no1, self.line_no2));
            self.line_no1 += 1;
            self.line_no2 += 1;
        }
    }

    fn removed(&mut self, source: Range<usize>) {
        let lines1 = self.lines1;
        for i in source {
            let line = &lines1[i];
            self.push_removed(line, Highlight::whole_line(line));
        }
    }

    fn added(&mut self, target: Range<usize>) {
        let lines2 = self.lines2;
        for j in target {
            let line = &lines2[j];
            self.push_added(line, Highlight::whole_line(line));
        }
    }

    fn replace(&mut self, source: Range<usize>, target: Range<usize>) {
        let paired = source.len().min(target.len());
        tracing::trace!(
            removed = source.len(),
            added = target.len(),
            paired,
            "pairing replace block"
        );

        let (lines1, lines2) = (self.lines1, self.lines2);
        for k in 0..paired {
            let (left, right) = (&lines1[source.start + k], &lines2[target.start + k]);
            let (left_highlights, right_highlights) =
                highlight_pair(left, right, self.tokenizer, self.max_trace_cells);

            self.push_removed(left, left_highlights);
            self.push_added(right, right_highlights);
        }

        self.removed(source.start + paired..source.end);
        self.added(target.start + paired..target.end);
    }

    fn push_removed(&mut self, line: &str, highlights: Vec<Highlight>) {
        self.rows
            .push(DisplayLine::removed(line, self.line_no1, highlights));
        self.line_no1 += 1;
    }

    fn push_added(&mut self, line: &str, highlights: Vec<Highlight>) {
        self.rows
            .push(DisplayLine::added(line, self.line_no2, highlights));
        self.line_no2 += 1;
    }
}
