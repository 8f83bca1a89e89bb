use crate::artifacts::tokens::{DEFAULT_TOKEN_PATTERN, Token, Tokenizer};
use anyhow::Context;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn try_parse(pattern: &str) -> anyhow::Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid token pattern: {pattern}"))?;

        Ok(Self { pattern })
    }

    pub fn default_pattern() -> Self {
        Self::try_parse(DEFAULT_TOKEN_PATTERN).expect("default token pattern compiles")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Emits one token per rune of `gap`, starting at rune offset `start`.
fn push_runes<'l>(tokens: &mut Vec<Token<'l>>, gap: &'l str, mut start: usize) -> usize {
    for (idx, ch) in gap.char_indices() {
        tokens.push(Token::new(&gap[idx..idx + ch.len_utf8()], start, start + 1));
        start += 1;
    }
    start
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'l>(&self, line: &'l str) -> Vec<Token<'l>> {
        let mut tokens = Vec::new();
        let (mut byte, mut rune) = (0, 0);

        for found in self.pattern.find_iter(line).filter(|m| !m.is_empty()) {
            rune = push_runes(&mut tokens, &line[byte..found.start()], rune);

            let len = found.as_str().chars().count();
            tokens.push(Token::new(found.as_str(), rune, rune + len));
            (byte, rune) = (found.end(), rune + len);
        }

        if tokens.is_empty() {
            return vec![Token::new(line, 0, line.chars().count())];
        }

        push_runes(&mut tokens, &line[byte..], rune);
        tokens
    }

    fn name(&self) -> &str {
        self.pattern()
    }
}
