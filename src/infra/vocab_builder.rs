// ============================================================
// Layer 6 - Vocabulary Builder
// ============================================================
// Produces a vocabulary file from a corpus:
//
//   1. Tokenise every line with the same WhitespaceTokenizer the
//      pipeline uses, so built and looked-up tokens always agree
//   2. Count token frequencies
//   3. Keep tokens seen at least `min_count` times
//   4. Sort by frequency (descending), ties broken alphabetically
//   5. Write the unknown marker on line 0, then one token per line,
//      up to `max_size` lines in total
//
// Output layout:
//   <unk>
//   the
//   a
//   ...

use anyhow::{Context, Result};
use std::{
    collections::HashMap,
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use crate::data::{line_reader::LineReader, tokenizer::WhitespaceTokenizer};

pub const UNKNOWN_TOKEN: &str = "<unk>";

#[derive(Debug, Clone)]
pub struct VocabBuilder {
    min_count: usize,
    /// Total lines including the unknown marker; None for unlimited
    max_size:  Option<usize>,
}

impl VocabBuilder {
    pub fn new(min_count: usize, max_size: Option<usize>) -> Self {
        Self { min_count: min_count.max(1), max_size }
    }

    /// Build the ordered token list (unknown marker first).
    pub fn build<I, S>(&self, lines: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokenizer = WhitespaceTokenizer::new();
        let mut freq: HashMap<String, usize> = HashMap::new();

        for line in lines {
            for token in tokenizer.tokenize(line.as_ref())? {
                *freq.entry(token).or_insert(0) += 1;
            }
        }

        let mut words: Vec<(String, usize)> = freq
            .into_iter()
            .filter(|(word, count)| *count >= self.min_count && word != UNKNOWN_TOKEN)
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        if let Some(max) = self.max_size {
            words.truncate(max.saturating_sub(1));
        }

        let mut vocab = Vec::with_capacity(words.len() + 1);
        vocab.push(UNKNOWN_TOKEN.to_string());
        vocab.extend(words.into_iter().map(|(word, _)| word));
        Ok(vocab)
    }

    /// Read `corpus`, build the vocabulary and write it to `output`.
    /// Returns the number of lines written.
    pub fn build_file(&self, corpus: &Path, output: &Path) -> Result<usize> {
        let reader = LineReader::open(corpus)?;
        let lines  = reader.read_lines()?.collect::<Result<Vec<String>, _>>()?;
        let vocab  = self.build(&lines)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(output)
            .with_context(|| format!("Cannot create vocabulary file '{}'", output.display()))?;
        let mut w = BufWriter::new(file);
        for token in &vocab {
            writeln!(w, "{token}")?;
        }
        w.flush()?;

        tracing::info!(
            "Vocabulary of {} tokens built from {} lines, saved to '{}'",
            vocab.len(),
            lines.len(),
            output.display()
        );
        Ok(vocab.len())
    }
}
