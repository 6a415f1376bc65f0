// ============================================================
// Layer 4 - Length Annotator
// ============================================================
// Turns tokens into ids through a TokenLookup and attaches the
// token count, producing the EncodedSentence the batcher needs.

use crate::domain::{sentence::EncodedSentence, traits::TokenLookup};

/// Map every token to its id, in order.
pub fn encode_tokens<L: TokenLookup + ?Sized>(lookup: &L, tokens: &[String]) -> Vec<i64> {
    tokens.iter().map(|t| lookup.lookup(t)).collect()
}

/// Pair an id sequence with its length.
pub fn annotate(ids: Vec<i64>) -> EncodedSentence {
    let length = ids.len();
    EncodedSentence { ids, length }
}
