use burn::data::dataset::Dataset;

use crate::data::{pipeline::Pipeline, tensor_batcher::check_tensor_range};
use crate::domain::{
    sentence::EncodedSentence,
    traits::{LineSource, TokenLookup},
};
use crate::error::Result;

/// An encoded corpus held in memory, for use with burn's DataLoader.
pub struct SentenceDataset {
    sentences: Vec<EncodedSentence>,
}

impl SentenceDataset {
    pub fn new(sentences: Vec<EncodedSentence>) -> Self { Self { sentences } }

    /// Drain the pipeline's sentence stream into memory: every epoch,
    /// in the order the shuffle buffer (if any) emits them. Fails if a
    /// sentence cannot be stored in an i32 tensor.
    pub fn from_pipeline<S: LineSource, L: TokenLookup>(pipeline: &Pipeline<S, L>) -> Result<Self> {
        let sentences = pipeline
            .sentences()
            .map(|sentence| {
                let sentence = sentence?;
                check_tensor_range(&sentence)?;
                Ok(sentence)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(sentences))
    }

    pub fn total_tokens(&self) -> usize {
        self.sentences.iter().map(|s| s.length).sum()
    }
}

impl Dataset<EncodedSentence> for SentenceDataset {
    fn get(&self, index: usize) -> Option<EncodedSentence> {
        self.sentences.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.sentences.len()
    }
}
