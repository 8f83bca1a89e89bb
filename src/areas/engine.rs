use crate::areas::source::{CompareError, read_lines, split_lines};
use crate::artifacts::comparison::assembler::Assembler;
use crate::artifacts::comparison::result::ComparisonResult;
use crate::artifacts::diff::align_or_fallback;
use crate::artifacts::diff::myers::DEFAULT_MAX_TRACE_CELLS;
use crate::artifacts::normalize::Normalizer;
use crate::artifacts::tokens::Tokenizer;
use crate::artifacts::tokens::registry::TokenizerRegistry;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Registry key (`.rs`) or language name (`rust`) used to pick the
    /// tokenizer before looking at file extensions.
    pub language_hint: Option<String>,
    pub ignore_whitespace: bool,
    /// Regexes whose matches are removed from lines before comparison.
    pub ignore_patterns: Vec<String>,
    /// Extension (or category) to token regex overrides.
    pub token_patterns: HashMap<String, String>,
    /// Budget for the Myers trace before falling back to positional
    /// comparison.
    pub max_trace_cells: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            language_hint: None,
            ignore_whitespace: false,
            ignore_patterns: Vec::new(),
            token_patterns: HashMap::new(),
            max_trace_cells: DEFAULT_MAX_TRACE_CELLS,
        }
    }
}

/// Compares pairs of line sequences under a fixed configuration.
///
/// The configuration is compiled once here and only read afterwards, so a
/// single engine can serve concurrent comparisons.
#[derive(Debug, Clone)]
pub struct Engine {
    language_hint: Option<String>,
    normalizer: Normalizer,
    tokenizers: TokenizerRegistry,
    max_trace_cells: usize,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let normalizer = Normalizer::new(&options.ignore_patterns, options.ignore_whitespace);
        let tokenizers = TokenizerRegistry::new(&options.token_patterns);

        tracing::debug!(
            ignore_patterns = normalizer.pattern_count(),
            ignore_whitespace = options.ignore_whitespace,
            tokenizers = tokenizers.len(),
            language = options.language_hint.as_deref().unwrap_or(""),
            "engine constructed"
        );

        Self {
            language_hint: options
                .language_hint
                .filter(|hint| !hint.trim().is_empty()),
            normalizer,
            tokenizers,
            max_trace_cells: options.max_trace_cells,
        }
    }

    /// Registers an additional tokenizer before the engine is shared.
    pub fn with_tokenizer(mut self, key: &str, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizers = self.tokenizers.with_tokenizer(key, tokenizer);
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn compare_files(
        &self,
        path1: &Path,
        path2: &Path,
    ) -> Result<ComparisonResult, CompareError> {
        let lines1 = read_lines(path1)?;
        let lines2 = read_lines(path2)?;

        Ok(self.compare_lines(
            lines1,
            lines2,
            &path1.display().to_string(),
            &path2.display().to_string(),
        ))
    }

    pub fn compare_texts(
        &self,
        text1: &str,
        text2: &str,
        label1: &str,
        label2: &str,
    ) -> ComparisonResult {
        self.compare_lines(split_lines(text1), split_lines(text2), label1, label2)
    }

    /// Compares two line sequences. Never fails: an alignment that is too
    /// expensive degrades to positional comparison.
    pub fn compare_lines(
        &self,
        lines1: Vec<String>,
        lines2: Vec<String>,
        label1: &str,
        label2: &str,
    ) -> ComparisonResult {
        let (ops, strategy) = {
            let keys1 = self.normalizer.normalize_all(&lines1);
            let keys2 = self.normalizer.normalize_all(&lines2);
            align_or_fallback(&keys1, &keys2, self.max_trace_cells)
        };
        let tokenizer = self
            .tokenizers
            .select(self.language_hint.as_deref(), [label1, label2]);

        tracing::debug!(
            left = lines1.len(),
            right = lines2.len(),
            operations = ops.len(),
            ?strategy,
            tokenizer = tokenizer.name(),
            "lines aligned"
        );

        let rows = Assembler::new(&lines1, &lines2, tokenizer, self.max_trace_cells).assemble(&ops);

        ComparisonResult::new(
            rows,
            label1.to_string(),
            label2.to_string(),
            lines1,
            lines2,
        )
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::comparison::display_line::{DisplayLine, LineType};
    use crate::artifacts::comparison::result::Stats;
    use crate::artifacts::highlight::Highlight;
    use crate::artifacts::tokens::regex_tokenizer::RegexTokenizer;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[fixture]
    fn engine() -> Engine {
        Engine::default()
    }

    #[rstest]
    fn identical_single_line_is_equal(engine: Engine) {
        let result = engine.compare_lines(
            owned(&["Hello, World!"]),
            owned(&["Hello, World!"]),
            "a",
            "b",
        );

        assert_eq!(result.lines(), &[DisplayLine::equal("Hello, World!", 1, 1)]);
        assert!(!result.has_changes());
    }

    #[rstest]
    fn unrelated_lines_are_fully_replaced(engine: Engine) {
        let result = engine.compare_lines(owned(&["foo"]), owned(&["bar"]), "a", "b");

        assert_eq!(
            result.lines(),
            &[
                DisplayLine::removed("foo", 1, vec![Highlight::new(0, 3)]),
                DisplayLine::added("bar", 1, vec![Highlight::new(0, 3)]),
            ]
        );
    }

    #[rstest]
    fn changed_token_is_highlighted_alone(engine: Engine) {
        let result = engine.compare_lines(owned(&["let x = 1"]), owned(&["let x = 2"]), "a", "b");

        assert_eq!(
            result.lines(),
            &[
                DisplayLine::removed("let x = 1", 1, vec![Highlight::new(8, 9)]),
                DisplayLine::added("let x = 2", 1, vec![Highlight::new(8, 9)]),
            ]
        );
    }

    #[rstest]
    fn empty_left_side_adds_everything(engine: Engine) {
        let result = engine.compare_lines(Vec::new(), owned(&["a", "b"]), "a", "b");

        assert_eq!(
            result.lines(),
            &[
                DisplayLine::added("a", 1, vec![Highlight::new(0, 1)]),
                DisplayLine::added("b", 2, vec![Highlight::new(0, 1)]),
            ]
        );
        assert_eq!(result.stats(), Stats::new(2, 0, 0));
    }

    #[test]
    fn whitespace_folding_keeps_original_content() {
        let engine = Engine::new(EngineOptions {
            ignore_whitespace: true,
            ..EngineOptions::default()
        });

        let result = engine.compare_lines(owned(&["foo  bar"]), owned(&["foo bar"]), "a", "b");

        assert_eq!(result.lines(), &[DisplayLine::equal("foo  bar", 1, 1)]);
    }

    #[test]
    fn ignore_patterns_hide_volatile_text() {
        let engine = Engine::new(EngineOptions {
            ignore_patterns: vec![r"\d{2}:\d{2}:\d{2}".to_string(), "(".to_string()],
            ..EngineOptions::default()
        });

        let result = engine.compare_lines(
            owned(&["[12:00:01] started", "done"]),
            owned(&["[17:45:59] started", "done"]),
            "a",
            "b",
        );

        assert!(!result.has_changes());
        assert_eq!(result.lines()[0].content, "[12:00:01] started");
        assert_eq!(engine.normalizer().pattern_count(), 1);
    }

    #[rstest]
    fn both_empty_is_empty_result(engine: Engine) {
        let result = engine.compare_lines(Vec::new(), Vec::new(), "a", "b");

        assert!(result.lines().is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn tiny_budget_falls_back_to_positional() {
        let engine = Engine::new(EngineOptions {
            max_trace_cells: 1,
            ..EngineOptions::default()
        });

        let result = engine.compare_lines(owned(&["x", "a", "b"]), owned(&["a", "b"]), "a", "b");

        let types = result
            .lines()
            .iter()
            .map(|line| (line.line_type, line.content.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![
                (LineType::Removed, "x"),
                (LineType::Added, "a"),
                (LineType::Removed, "a"),
                (LineType::Added, "b"),
                (LineType::Removed, "b"),
            ]
        );
    }

    #[test]
    fn custom_tokenizer_changes_granularity() {
        let whole_words = RegexTokenizer::try_parse(r"\S+|\s+").unwrap();
        let engine = Engine::default().with_tokenizer("log", Arc::new(whole_words));

        let result = engine.compare_lines(owned(&["x=1 ok"]), owned(&["x=2 ok"]), "a.log", "b.log");

        assert_eq!(result.lines()[0].highlights, vec![Highlight::new(0, 3)]);
    }

    #[test]
    fn language_hint_overrides_extension() {
        let engine = Engine::new(EngineOptions {
            language_hint: Some("words".to_string()),
            token_patterns: HashMap::from([("words".to_string(), r"\S+|\s+".to_string())]),
            ..EngineOptions::default()
        });

        let result = engine.compare_lines(owned(&["a.b c"]), owned(&["a.x c"]), "l.rs", "r.rs");

        assert_eq!(result.lines()[0].highlights, vec![Highlight::new(0, 3)]);
    }

    #[test]
    fn compare_files_reports_unreadable_input() -> Result<(), Box<dyn std::error::Error>> {
        let dir = assert_fs::TempDir::new()?;
        let missing = dir.path().join("nope.txt");

        let err = Engine::default().compare_files(&missing, &missing).unwrap_err();

        assert!(matches!(err, CompareError::Read { .. }));
        Ok(())
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[ab ]{0,4}", 0..12)
    }

    proptest! {
        #[test]
        fn prop_self_comparison_is_all_equal(lines in lines_strategy()) {
            let result = Engine::default().compare_lines(lines.clone(), lines.clone(), "a", "a");

            prop_assert!(!result.has_changes());
            prop_assert_eq!(result.lines().len(), lines.len());
            prop_assert!(result.lines().iter().all(|line| line.highlights.is_empty()));
        }

        #[test]
        fn prop_rows_rebuild_both_sides(a in lines_strategy(), b in lines_strategy()) {
            let result = Engine::default().compare_lines(a.clone(), b.clone(), "a", "b");

            let left = result.lines().iter()
                .filter(|line| line.line_type != LineType::Added)
                .map(|line| line.content.clone())
                .collect::<Vec<_>>();
            let right = result.lines().iter()
                .filter(|line| line.line_type != LineType::Removed)
                .map(|line| line.content.clone())
                .collect::<Vec<_>>();

            prop_assert_eq!(left, a);
            prop_assert_eq!(right, b);
        }

        #[test]
        fn prop_line_numbers_follow_each_side(a in lines_strategy(), b in lines_strategy()) {
            let result = Engine::default().compare_lines(a, b, "a", "b");
            let (mut next1, mut next2) = (1, 1);

            for line in result.lines() {
                match line.line_type {
                    LineType::Equal => {
                        prop_assert_eq!((line.line_no1, line.line_no2), (next1, next2));
                        next1 += 1;
                        next2 += 1;
                    }
                    LineType::Removed => {
                        prop_assert_eq!((line.line_no1, line.line_no2), (next1, 0));
                        next1 += 1;
                    }
                    LineType::Added => {
                        prop_assert_eq!((line.line_no1, line.line_no2), (0, next2));
                        next2 += 1;
                    }
                }
            }
        }

        #[test]
        fn prop_highlights_stay_inside_content(a in lines_strategy(), b in lines_strategy()) {
            let result = Engine::default().compare_lines(a, b, "a", "b");

            for line in result.lines() {
                let rune_len = line.content.chars().count();
                for h in &line.highlights {
                    prop_assert!(h.start < h.end && h.end <= rune_len);
                }
                for pair in line.highlights.windows(2) {
                    prop_assert!(pair[0].end < pair[1].start);
                }
            }
        }

        #[test]
        fn prop_replay_is_identical(a in lines_strategy(), b in lines_strategy()) {
            let engine = Engine::default();
            let first = engine.compare_lines(a.clone(), b.clone(), "a", "b");
            let second = engine.compare_lines(a, b, "a", "b");

            prop_assert_eq!(first, second);
        }
    }
}
