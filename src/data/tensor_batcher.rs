// ============================================================
// Layer 4 - Tensor Batcher
// ============================================================
// Implements Burn's Batcher trait so a SentenceDataset can be
// fed through Burn's DataLoader.
//
// Input:  Vec of N EncodedSentences of varying length
// Output: SentenceBatch with
//           ids     [N, max_length]  (padded per batch)
//           lengths [N]
//
// Padding reuses PaddedBatch, so the tensors hold exactly what the
// streaming `batch` command prints. Burn Int tensors are built from
// i32: the pad value is narrowed when the batcher is created and
// every sentence is range-checked before it reaches the DataLoader
// (see check_tensor_range), so nothing wraps on the way in.
//
// A batch made only of empty lines has max_length 0; its ids
// tensor gets a single pad column since a zero-width dimension
// cannot be reshaped into.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::{batch::PaddedBatch, sentence::EncodedSentence};
use crate::error::{PipelineError, Result};

/// Narrow an id or pad value to a tensor element.
fn narrow(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| PipelineError::OutOfTensorRange(value))
}

/// Fail if any id or the length of `sentence` would not fit in i32.
pub fn check_tensor_range(sentence: &EncodedSentence) -> Result<()> {
    for &id in &sentence.ids {
        narrow(id)?;
    }
    narrow(i64::try_from(sentence.length).unwrap_or(i64::MAX))?;
    Ok(())
}

// ─── SentenceBatch ────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SentenceBatch<B: Backend> {
    /// Token ids, shape: [batch_size, max_length]
    pub ids: Tensor<B, 2, Int>,

    /// Unpadded sentence lengths, shape: [batch_size]
    pub lengths: Tensor<B, 1, Int>,
}

// ─── SentenceBatcher ──────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct SentenceBatcher<B: Backend> {
    pub device: B::Device,
    pad:        i32,
}

impl<B: Backend> SentenceBatcher<B> {
    /// Fails with `OutOfTensorRange` if `pad_value` does not fit in i32.
    pub fn new(device: B::Device, pad_value: i64) -> Result<Self> {
        Ok(Self { device, pad: narrow(pad_value)? })
    }

    fn to_tensors(&self, batch: &PaddedBatch) -> SentenceBatch<B> {
        let rows = batch.rows();

        // Ids and lengths were range-checked with check_tensor_range.
        let (flat, width): (Vec<i32>, usize) = if batch.max_length == 0 {
            (vec![self.pad; rows], 1)
        } else {
            let flat = batch.flat_ids().into_iter().map(|id| id as i32).collect();
            (flat, batch.max_length)
        };
        let lengths: Vec<i32> = batch.lengths.iter().map(|&l| l as i32).collect();

        let ids = Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([rows, width]);

        let lengths = Tensor::<B, 1, Int>::from_ints(lengths.as_slice(), &self.device);

        SentenceBatch { ids, lengths }
    }
}

impl<B: Backend> Batcher<EncodedSentence, SentenceBatch<B>> for SentenceBatcher<B> {
    fn batch(&self, items: Vec<EncodedSentence>) -> SentenceBatch<B> {
        let padded = PaddedBatch::from_sentences(items, i64::from(self.pad));
        self.to_tensors(&padded)
    }
}
