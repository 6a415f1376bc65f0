// ============================================================
// Layer 3 - PaddedBatch Domain Type
// ============================================================
// A group of encoded sentences laid out as a rectangle:
//
//   ids:     rows x max_length, each row left-aligned and
//            filled with the pad value past its length
//   lengths: one original length per row
//
// Example (pad value 0):
//   sentences: [0, 1, 2] and [3]
//   ids:       [[0, 1, 2],
//               [3, 0, 0]]
//   lengths:   [3, 1]
//
// max_length is computed from the rows in this batch only.

use serde::{Deserialize, Serialize};

use crate::domain::sentence::EncodedSentence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedBatch {
    /// Id matrix, shape [rows, max_length]
    pub ids: Vec<Vec<i64>>,

    /// Unpadded length of each row, shape [rows]
    pub lengths: Vec<usize>,

    /// Longest row length in this batch
    pub max_length: usize,
}

impl PaddedBatch {
    /// Pad a group of sentences to the longest one among them.
    pub fn from_sentences(sentences: Vec<EncodedSentence>, pad_value: i64) -> Self {
        let max_length = sentences.iter().map(|s| s.length).max().unwrap_or(0);

        let mut ids     = Vec::with_capacity(sentences.len());
        let mut lengths = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let mut row = sentence.ids;
            row.resize(max_length, pad_value);
            ids.push(row);
            lengths.push(sentence.length);
        }

        Self { ids, lengths, max_length }
    }

    /// Number of rows (sentences) in this batch
    pub fn rows(&self) -> usize {
        self.lengths.len()
    }

    /// Row-major flattening of the id matrix, as expected by
    /// tensor constructors.
    pub fn flat_ids(&self) -> Vec<i64> {
        self.ids.iter().flatten().copied().collect()
    }
}
