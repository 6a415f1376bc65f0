// ============================================================
// Layer 4 - Vocabulary Lookup
// ============================================================
// Loads a vocabulary file (one token per line) into an
// immutable token → id table. The id of a token is the
// zero-based number of the line it appears on:
//
//   vocab.txt        ids
//   ---------        ---
//   <unk>            0
//   the              1
//   cat              2
//
// Tokens that are not in the file resolve to the configured
// default id (0 by convention, which is <unk> above).
//
// If a token appears twice, its first line wins and a warning
// is logged. Later lines still consume their line number, so
// every other token keeps id == line index.

use std::{collections::HashMap, path::Path};

use crate::data::line_reader::LineReader;
use crate::domain::traits::TokenLookup;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    ids:        HashMap<String, i64>,
    lines:      usize,
    default_id: i64,
}

impl Vocabulary {
    /// Read a vocabulary file from disk.
    pub fn load(path: impl AsRef<Path>, default_id: i64) -> Result<Self> {
        let reader = LineReader::open(path.as_ref())?;
        let vocab  = Self::from_lines(reader.read_lines()?, default_id)?;

        if vocab.is_empty() {
            tracing::warn!(
                "Vocabulary '{}' is empty, every token will map to id {}",
                reader.path().display(),
                default_id
            );
        }
        tracing::info!(
            "Loaded vocabulary of {} tokens from '{}'",
            vocab.len(),
            reader.path().display()
        );
        Ok(vocab)
    }

    /// Build a vocabulary from already-read lines.
    pub fn from_lines<I>(lines: I, default_id: i64) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut ids   = HashMap::new();
        let mut count = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            let token = line?;
            count += 1;

            if ids.contains_key(&token) {
                tracing::warn!(
                    "Duplicate vocabulary entry '{}' on line {} ignored",
                    token,
                    index
                );
                continue;
            }
            ids.insert(token, index as i64);
        }

        Ok(Self { ids, lines: count, default_id })
    }

    /// Build a vocabulary from an in-memory token list
    #[cfg(test)]
    pub fn from_tokens<I, S>(tokens: I, default_id: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids   = HashMap::new();
        let mut count = 0usize;
        for (index, token) in tokens.into_iter().enumerate() {
            ids.entry(token.into()).or_insert(index as i64);
            count += 1;
        }
        Self { ids, lines: count, default_id }
    }

    /// Number of lines (ids) in the vocabulary file
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }
}

impl TokenLookup for Vocabulary {
    fn lookup(&self, token: &str) -> i64 {
        self.ids.get(token).copied().unwrap_or(self.default_id)
    }

    fn default_id(&self) -> i64 {
        self.default_id
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_token_on_line_k_has_id_k() {
        let tokens = ["<unk>", "the", "cat", "sat", "on", "mat"];
        let vocab  = Vocabulary::from_tokens(tokens, 0);
        for (k, token) in tokens.iter().enumerate() {
            assert_eq!(vocab.lookup(token), k as i64);
        }
    }

    #[test]
    fn test_unknown_token_gets_default_id() {
        let vocab = Vocabulary::from_tokens(["a", "b"], 7);
        assert_eq!(vocab.lookup("zebra"), 7);
        assert_eq!(vocab.lookup(""), 7);
        assert_eq!(vocab.default_id(), 7);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let vocab = Vocabulary::from_tokens(["<unk>", "Cat"], 0);
        assert_eq!(vocab.lookup("Cat"), 1);
        assert_eq!(vocab.lookup("cat"), 0);
        assert_eq!(vocab.lookup("Cat "), 0);
    }

    #[test]
    fn test_duplicate_keeps_first_id_and_line_numbers() {
        let lines = ["a", "b", "a", "c"].map(|s| Ok(s.to_string()));
        let vocab = Vocabulary::from_lines(lines, 0).unwrap();
        assert_eq!(vocab.lookup("a"), 0);
        assert_eq!(vocab.lookup("c"), 3);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "<unk>\nhello\nworld").unwrap();
        f.flush().unwrap();

        let vocab = Vocabulary::load(f.path(), 0).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup("world"), 2);
        assert!(vocab.contains("hello"));
    }

    #[test]
    fn test_empty_file_maps_everything_to_default() {
        let f     = NamedTempFile::new().unwrap();
        let vocab = Vocabulary::load(f.path(), 3).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.lookup("anything"), 3);
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let err = Vocabulary::load("/no/such/vocab.txt", 0).unwrap_err();
        assert!(matches!(err, PipelineError::FileAccess { .. }));
    }
}
