use crate::artifacts::comparison::display_line::{DisplayLine, LineType};
use crate::artifacts::comparison::filter::LineFilter;
use derive_new::new;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct Stats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// The finished, immutable outcome of comparing two line sequences.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ComparisonResult {
    lines: Vec<DisplayLine>,
    label1: String,
    label2: String,
    lines1: Vec<String>,
    lines2: Vec<String>,
}

impl ComparisonResult {
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.label1, &self.label2)
    }

    /// The two original, unnormalized input sequences.
    pub fn source_lines(&self) -> (&[String], &[String]) {
        (&self.lines1, &self.lines2)
    }

    pub fn stats(&self) -> Stats {
        self.lines
            .iter()
            .fold(Stats::default(), |mut stats, line| {
                match line.line_type {
                    LineType::Added => stats.added += 1,
                    LineType::Removed => stats.removed += 1,
                    LineType::Equal => stats.unchanged += 1,
                }
                stats
            })
    }

    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DisplayLine::is_change)
    }

    pub fn filtered(&self, filter: LineFilter) -> impl Iterator<Item = &DisplayLine> {
        self.lines
            .iter()
            .filter(move |line| filter.matches(line.line_type))
    }

    /// Index of the first line of every contiguous run of changes.
    pub fn change_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(idx, line)| {
                line.is_change() && (*idx == 0 || !self.lines[idx - 1].is_change())
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}
