use crate::artifacts::highlight::Highlight;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Equal,
    Added,
    Removed,
}

impl LineType {
    pub fn sign(&self) -> char {
        match self {
            LineType::Equal => ' ',
            LineType::Added => '+',
            LineType::Removed => '-',
        }
    }
}

/// One row of a comparison, carrying the original (never normalized) text.
///
/// Line numbers are 1-based; `0` means the line does not exist on that side.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DisplayLine {
    pub line_type: LineType,
    pub content: String,
    pub line_no1: usize,
    pub line_no2: usize,
    pub highlights: Vec<Highlight>,
}

impl DisplayLine {
    pub fn equal(content: &str, line_no1: usize, line_no2: usize) -> Self {
        Self::new(LineType::Equal, content.to_string(), line_no1, line_no2, Vec::new())
    }

    pub fn removed(content: &str, line_no1: usize, highlights: Vec<Highlight>) -> Self {
        Self::new(LineType::Removed, content.to_string(), line_no1, 0, highlights)
    }

    pub fn added(content: &str, line_no2: usize, highlights: Vec<Highlight>) -> Self {
        Self::new(LineType::Added, content.to_string(), 0, line_no2, highlights)
    }

    pub fn is_change(&self) -> bool {
        self.line_type != LineType::Equal
    }

    /// Splits `content` into consecutive `(text, highlighted)` runs.
    ///
    /// Highlight offsets are runes; this does the byte conversion so that
    /// renderers never slice the content themselves.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut boundaries = self
            .content
            .char_indices()
            .map(|(byte, _)| byte)
            .collect::<Vec<_>>();
        boundaries.push(self.content.len());
        let byte_at = |rune: usize| boundaries[rune.min(boundaries.len() - 1)];

        let mut segments = Vec::new();
        let mut cursor = 0;

        for h in &self.highlights {
            let (start, end) = (byte_at(h.start), byte_at(h.end));
            if start > cursor {
                segments.push((&self.content[cursor..start], false));
            }
            if end > start.max(cursor) {
                segments.push((&self.content[start.max(cursor)..end], true));
            }
            cursor = cursor.max(end);
        }

        if cursor < self.content.len() {
            segments.push((&self.content[cursor..], false));
        }

        segments
    }
}
