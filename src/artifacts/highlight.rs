use crate::artifacts::diff::align_or_fallback;
use crate::artifacts::diff::operation::OpKind;
use crate::artifacts::tokens::{Token, Tokenizer};
use derive_new::new;

/// Half-open rune span `[start, end)` marking a changed part of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

impl Highlight {
    /// Span covering all runes of `line`, or nothing for an empty line.
    pub fn whole_line(line: &str) -> Vec<Highlight> {
        let rune_len = line.chars().count();
        if rune_len == 0 {
            Vec::new()
        } else {
            vec![Highlight::new(0, rune_len)]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Span from the first token's start to the last token's end in
/// `tokens[range]`, or `None` for an empty range.
pub fn token_range_to_highlight(tokens: &[Token], start: usize, end: usize) -> Option<Highlight> {
    let end = end.min(tokens.len());
    if start >= end {
        return None;
    }

    Some(Highlight::new(tokens[start].start, tokens[end - 1].end)).filter(|h| !h.is_empty())
}

/// Sorts spans and coalesces every pair where the next span starts at or
/// before the previous end. Zero-width spans are discarded first.
pub fn merge_highlights(mut highlights: Vec<Highlight>) -> Vec<Highlight> {
    highlights.retain(|h| !h.is_empty());
    highlights.sort_by_key(|h| (h.start, h.end));

    let mut merged: Vec<Highlight> = Vec::with_capacity(highlights.len());
    for h in highlights {
        if let Some(last) = merged.last_mut()
            && h.start <= last.end
        {
            last.end = last.end.max(h.end);
            continue;
        }
        merged.push(h);
    }

    merged
}

/// Marks the token spans that differ between a pair of replaced lines.
///
/// Deleted and replaced tokens are highlighted on the left, inserted and
/// replaced tokens on the right.
pub fn highlight_pair(
    left: &str,
    right: &str,
    tokenizer: &dyn Tokenizer,
    max_trace_cells: usize,
) -> (Vec<Highlight>, Vec<Highlight>) {
    let left_tokens = tokenizer.tokenize(left);
    let right_tokens = tokenizer.tokenize(right);

    let left_values = left_tokens.iter().map(|t| t.value).collect::<Vec<_>>();
    let right_values = right_tokens.iter().map(|t| t.value).collect::<Vec<_>>();

    let (ops, _) = align_or_fallback(&left_values, &right_values, max_trace_cells);

    let mut left_highlights = Vec::new();
    let mut right_highlights = Vec::new();

    for op in ops {
        if matches!(op.kind, OpKind::Delete | OpKind::Replace) {
            left_highlights.extend(token_range_to_highlight(
                &left_tokens,
                op.source.start,
                op.source.end,
            ));
        }
        if matches!(op.kind, OpKind::Insert | OpKind::Replace) {
            right_highlights.extend(token_range_to_highlight(
                &right_tokens,
                op.target.start,
                op.target.end,
            ));
        }
    }

    (
        merge_highlights(left_highlights),
        merge_highlights(right_highlights),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::myers::DEFAULT_MAX_TRACE_CELLS;
    use crate::artifacts::tokens::regex_tokenizer::RegexTokenizer;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tokenizer() -> RegexTokenizer {
        RegexTokenizer::default_pattern()
    }

    fn spans(pairs: &[(usize, usize)]) -> Vec<Highlight> {
        pairs.iter().map(|&(s, e)| Highlight::new(s, e)).collect()
    }

    #[rstest]
    fn changed_literal_is_the_only_highlight(tokenizer: RegexTokenizer) {
        let (left, right) = highlight_pair("let x = 1", "let x = 2", &tokenizer, DEFAULT_MAX_TRACE_CELLS);

        assert_eq!(left, spans(&[(8, 9)]));
        assert_eq!(right, spans(&[(8, 9)]));
    }

    #[rstest]
    fn unrelated_lines_are_fully_highlighted(tokenizer: RegexTokenizer) {
        let (left, right) = highlight_pair("foo", "bar", &tokenizer, DEFAULT_MAX_TRACE_CELLS);

        assert_eq!(left, spans(&[(0, 3)]));
        assert_eq!(right, spans(&[(0, 3)]));
    }

    #[rstest]
    fn pure_insertion_leaves_left_clean(tokenizer: RegexTokenizer) {
        let (left, right) = highlight_pair("call(a)", "call(a, b)", &tokenizer, DEFAULT_MAX_TRACE_CELLS);

        assert_eq!(left, Vec::new());
        assert_eq!(right, spans(&[(6, 9)]));
    }

    #[rstest]
    fn empty_side_gets_no_zero_width_mark(tokenizer: RegexTokenizer) {
        let (left, right) = highlight_pair("", "added", &tokenizer, DEFAULT_MAX_TRACE_CELLS);

        assert_eq!(left, Vec::new());
        assert_eq!(right, spans(&[(0, 5)]));
    }

    #[rstest]
    fn offsets_are_runes(tokenizer: RegexTokenizer) {
        let (left, right) = highlight_pair("naïve = 1", "naïve = 22", &tokenizer, DEFAULT_MAX_TRACE_CELLS);

        assert_eq!(left, spans(&[(8, 9)]));
        assert_eq!(right, spans(&[(8, 10)]));
    }

    #[test]
    fn merges_overlapping_and_touching_spans() {
        let merged = merge_highlights(spans(&[(5, 7), (0, 2), (2, 3), (6, 9), (12, 12), (11, 13)]));
        assert_eq!(merged, spans(&[(0, 3), (5, 9), (11, 13)]));
    }

    #[test]
    fn empty_token_range_has_no_highlight() {
        let tokens = vec![Token::new("a", 0, 1)];

        assert_eq!(token_range_to_highlight(&tokens, 1, 1), None);
        assert_eq!(token_range_to_highlight(&tokens, 0, 5), Some(Highlight::new(0, 1)));
        assert_eq!(token_range_to_highlight(&[], 0, 0), None);
    }

    proptest! {
        #[test]
        fn prop_highlights_are_sorted_disjoint_and_bounded(
            left in "[a-c =1-3]{0,16}",
            right in "[a-c =1-3]{0,16}",
        ) {
            let tokenizer = RegexTokenizer::default_pattern();
            let (lh, rh) = highlight_pair(&left, &right, &tokenizer, DEFAULT_MAX_TRACE_CELLS);

            for (line, highlights) in [(&left, &lh), (&right, &rh)] {
                let rune_len = line.chars().count();
                for h in highlights.iter() {
                    prop_assert!(h.start < h.end);
                    prop_assert!(h.end <= rune_len);
                }
                for pair in highlights.windows(2) {
                    prop_assert!(pair[0].end < pair[1].start);
                }
            }
        }
    }
}
