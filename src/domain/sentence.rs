// ============================================================
// Layer 3 - EncodedSentence Domain Type
// ============================================================
// One corpus line after tokenisation and vocabulary lookup,
// paired with its token count.
//
// Example:
//   line:   "the cat sat"
//   ids:    [4, 17, 9]
//   length: 3

use serde::{Deserialize, Serialize};

/// A sentence as a sequence of vocabulary ids plus its length.
///
/// `length` always equals `ids.len()`; padding is only ever added
/// to the batch rows built from this value, never to `ids` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSentence {
    pub ids:    Vec<i64>,
    pub length: usize,
}
