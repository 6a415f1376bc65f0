// ============================================================
// Layer 2 - Vocabulary Use Cases
// ============================================================
// BuildVocabUseCase  - corpus → vocabulary file
// LookupUseCase      - vocabulary file + tokens → ids

use anyhow::Result;
use std::{io::Write, path::PathBuf};

use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::TokenLookup;
use crate::infra::vocab_builder::VocabBuilder;

pub struct BuildVocabUseCase {
    corpus:  PathBuf,
    output:  PathBuf,
    builder: VocabBuilder,
}

impl BuildVocabUseCase {
    pub fn new(corpus: PathBuf, output: PathBuf, min_count: usize, max_size: Option<usize>) -> Self {
        Self { corpus, output, builder: VocabBuilder::new(min_count, max_size) }
    }

    /// Returns the number of tokens written, including `<unk>`.
    pub fn execute(&self) -> Result<usize> {
        tracing::info!("Building vocabulary from '{}'", self.corpus.display());
        self.builder.build_file(&self.corpus, &self.output)
    }
}

pub struct LookupUseCase {
    vocab: Vocabulary,
}

impl LookupUseCase {
    pub fn new(vocab_path: PathBuf, default_id: i64) -> Result<Self> {
        let vocab = Vocabulary::load(&vocab_path, default_id)?;
        Ok(Self { vocab })
    }

    /// Write `token<TAB>id` for every token, in the order given.
    pub fn execute<W: Write>(&self, tokens: &[String], out: &mut W) -> Result<()> {
        for token in tokens {
            let id = if self.vocab.contains(token) {
                self.vocab.lookup(token)
            } else {
                let id = self.vocab.default_id();
                tracing::debug!("'{}' not in vocabulary, using default id {}", token, id);
                id
            };
            writeln!(out, "{token}\t{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lookup_prints_ids_and_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "<unk>\nhello\nworld\n").unwrap();

        let use_case = LookupUseCase::new(path, 0).unwrap();
        let mut out  = Vec::new();
        let tokens   = ["world", "nope", "hello"].map(String::from);
        use_case.execute(&tokens, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "world\t2\nnope\t0\nhello\t1\n");
    }

    #[test]
    fn test_lookup_honours_configured_default_id() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "<unk>\nhello\n").unwrap();

        let use_case = LookupUseCase::new(path, 9).unwrap();
        let mut out  = Vec::new();
        use_case.execute(&["hello".to_string(), "bye".to_string()], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hello\t1\nbye\t9\n");
    }

    #[test]
    fn test_build_then_lookup() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        let vocab  = dir.path().join("vocab.txt");
        fs::write(&corpus, "b a\na\n").unwrap();

        let n = BuildVocabUseCase::new(corpus, vocab.clone(), 1, None).execute().unwrap();
        assert_eq!(n, 3);

        let lookup = LookupUseCase::new(vocab, 0).unwrap();
        let mut out = Vec::new();
        lookup.execute(&["a".to_string()], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\t1\n");
    }
}
