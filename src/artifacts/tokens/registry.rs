use crate::artifacts::tokens::regex_tokenizer::RegexTokenizer;
use crate::artifacts::tokens::{BUILTIN_TOKEN_PATTERNS, LANGUAGE_ALIASES, Tokenizer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Normalizes an extension or category key to the `.ext` lowercase form.
pub fn registry_key(raw: &str) -> String {
    let raw = raw.trim().to_lowercase();
    if raw.starts_with('.') {
        raw
    } else {
        format!(".{raw}")
    }
}

/// Read-only mapping from registry keys to tokenizers.
///
/// Built once from the built-in extension table plus user overrides and
/// never mutated afterwards, so it can be shared across comparisons.
#[derive(Debug, Clone)]
pub struct TokenizerRegistry {
    tokenizers: HashMap<String, Arc<dyn Tokenizer>>,
    default: Arc<dyn Tokenizer>,
}

impl TokenizerRegistry {
    /// Builds the registry, dropping any override whose pattern fails to
    /// compile.
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        let default: Arc<dyn Tokenizer> = Arc::new(RegexTokenizer::default_pattern());
        let mut compiled: HashMap<&str, Arc<dyn Tokenizer>> = HashMap::new();

        let mut tokenizers: HashMap<String, Arc<dyn Tokenizer>> = BUILTIN_TOKEN_PATTERNS
            .entries()
            .map(|(key, pattern)| {
                let tokenizer = compiled
                    .entry(*pattern)
                    .or_insert_with(|| Self::compile_or_default(pattern, &default))
                    .clone();
                (key.to_string(), tokenizer)
            })
            .collect();

        let mut keys = overrides.keys().collect::<Vec<_>>();
        keys.sort();

        for key in keys {
            let pattern = &overrides[key];
            match RegexTokenizer::try_parse(pattern) {
                Ok(tokenizer) => {
                    tokenizers.insert(registry_key(key), Arc::new(tokenizer));
                }
                Err(err) => {
                    tracing::warn!(key = %key, "dropping token pattern: {err:#}");
                }
            }
        }

        Self {
            tokenizers,
            default,
        }
    }

    fn compile_or_default(pattern: &str, default: &Arc<dyn Tokenizer>) -> Arc<dyn Tokenizer> {
        match RegexTokenizer::try_parse(pattern) {
            Ok(tokenizer) => Arc::new(tokenizer),
            Err(_) => default.clone(),
        }
    }

    /// Registers `tokenizer` under `key`, replacing any earlier entry.
    pub fn with_tokenizer(mut self, key: &str, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizers.insert(registry_key(key), tokenizer);
        self
    }

    pub fn get(&self, key: &str) -> Option<&dyn Tokenizer> {
        self.tokenizers.get(&registry_key(key)).map(Arc::as_ref)
    }

    pub(crate) fn len(&self) -> usize {
        self.tokenizers.len()
    }

    pub fn default_tokenizer(&self) -> &dyn Tokenizer {
        self.default.as_ref()
    }

    /// Resolves a language hint: a registered key first, then a known
    /// language name.
    fn by_language(&self, hint: &str) -> Option<&dyn Tokenizer> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }

        self.get(hint).or_else(|| {
            LANGUAGE_ALIASES
                .get(hint.to_lowercase().as_str())
                .and_then(|key| self.get(key))
        })
    }

    /// Looks up the extension of `label`. A bare dotfile name such as
    /// `.rs` counts as its own extension.
    fn by_extension(&self, label: &str) -> Option<&dyn Tokenizer> {
        let path = Path::new(label);
        let ext = path.extension().and_then(|ext| ext.to_str()).or_else(|| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.rsplit_once('.'))
                .map(|(_, ext)| ext)
                .filter(|ext| !ext.is_empty())
        })?;

        self.get(ext)
    }

    /// Picks the tokenizer for a comparison: the language hint, then the
    /// extension of either label, then the default pattern.
    pub fn select(&self, language_hint: Option<&str>, labels: [&str; 2]) -> &dyn Tokenizer {
        language_hint
            .and_then(|hint| self.by_language(hint))
            .or_else(|| labels.iter().find_map(|label| self.by_extension(label)))
            .unwrap_or_else(|| self.default_tokenizer())
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}
