// ============================================================
// Layer 4 - Whitespace Tokenizer
// ============================================================
// Splits a line into tokens on runs of whitespace using the
// `WhitespaceSplit` pre-tokenizer from the tokenizers crate.
//
//   "  the  cat\tsat "  →  ["the", "cat", "sat"]
//
// Punctuation is NOT split off ("cat." stays one token); only
// whitespace separates tokens. Empty pieces are never returned.

use tokenizers::pre_tokenizers::whitespace::WhitespaceSplit;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `line` into whitespace-delimited tokens, in order.
    pub fn tokenize(&self, line: &str) -> Result<Vec<String>> {
        let mut pre = PreTokenizedString::from(line);

        WhitespaceSplit
            .pre_tokenize(&mut pre)
            .map_err(|e| PipelineError::Tokenize(e.to_string()))?;

        let tokens = pre
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(piece, _, _)| piece)
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(tokens)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_single_spaces() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("a b c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let t      = WhitespaceTokenizer::new();
        let tokens = t.tokenize("  the \t cat\u{00A0}sat  ").unwrap();
        assert_eq!(tokens, vec!["the", "cat", "sat"]);
        assert!(tokens.iter().all(|tok| !tok.is_empty()));
    }

    #[test]
    fn test_keeps_punctuation_attached() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("Hello, world.").unwrap(), vec!["Hello,", "world."]);
    }

    #[test]
    fn test_empty_and_blank_lines_give_no_tokens() {
        let t = WhitespaceTokenizer::new();
        assert!(t.tokenize("").unwrap().is_empty());
        assert!(t.tokenize("   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_matches_std_split_whitespace() {
        let t    = WhitespaceTokenizer::new();
        let line = "Les chats  noirs\tdorment   à midi";
        let expected: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(t.tokenize(line).unwrap(), expected);
    }
}
