use regex::Regex;
use std::borrow::Cow;

/// Derives the comparison key of a line.
///
/// Ignore-patterns are stripped in configured order, then whitespace is
/// optionally folded. The original line is never modified.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    ignore_patterns: Vec<Regex>,
    ignore_whitespace: bool,
}

impl Normalizer {
    /// Compiles `patterns`, dropping the ones that are not valid regexes.
    pub fn new<S: AsRef<str>>(patterns: &[S], ignore_whitespace: bool) -> Self {
        let ignore_patterns = patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern.as_ref()) {
                Ok(re) => Some(re),
                Err(err) => {
                    tracing::warn!(pattern = pattern.as_ref(), "dropping ignore pattern: {err}");
                    None
                }
            })
            .collect();

        Self {
            ignore_patterns,
            ignore_whitespace,
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.ignore_patterns.len()
    }

    pub fn is_identity(&self) -> bool {
        self.ignore_patterns.is_empty() && !self.ignore_whitespace
    }

    pub fn normalize<'l>(&self, line: &'l str) -> Cow<'l, str> {
        let mut key = Cow::Borrowed(line);

        for re in &self.ignore_patterns {
            let stripped = match re.replace_all(&key, "") {
                Cow::Owned(stripped) => Some(stripped),
                Cow::Borrowed(_) => None,
            };
            if let Some(stripped) = stripped {
                key = Cow::Owned(stripped);
            }
        }

        if self.ignore_whitespace {
            key = Cow::Owned(key.split_whitespace().collect::<Vec<_>>().join(" "));
        }

        key
    }

    pub fn normalize_all<'l, S: AsRef<str>>(&self, lines: &'l [S]) -> Vec<Cow<'l, str>> {
        lines
            .iter()
            .map(|line| self.normalize(line.as_ref()))
            .collect()
    }
}
