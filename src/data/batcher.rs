// ============================================================
// Layer 4 - Padded Batcher
// ============================================================
// Groups a stream of EncodedSentences into consecutive batches
// of `batch_size` and pads each batch to its own longest row.
//
// Example with batch_size = 2, pad_value = 0:
//   stream:  [0 1 2] [3] [4 5] [6 7 8 9] [1]
//   batch 1: [[0 1 2] [3 0 0]]         lengths [3 1]
//   batch 2: [[4 5 0 0] [6 7 8 9]]     lengths [2 4]
//   batch 3: [[1]]                     lengths [1]   (remainder)
//
// The remainder batch (fewer than batch_size rows) is emitted
// by default and dropped when drop_remainder is set.
//
// Errors from upstream end the stream: the error is yielded
// once and no further batches follow.

use crate::domain::{batch::PaddedBatch, sentence::EncodedSentence};
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy)]
pub struct PaddedBatcher {
    batch_size:     usize,
    pad_value:      i64,
    drop_remainder: bool,
}

impl PaddedBatcher {
    /// Create a batcher with pad value 0 that keeps the remainder.
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "batch_size must be a positive integer".to_string(),
            ));
        }
        Ok(Self { batch_size, pad_value: 0, drop_remainder: false })
    }

    pub fn with_pad_value(mut self, pad_value: i64) -> Self {
        self.pad_value = pad_value;
        self
    }

    pub fn with_drop_remainder(mut self, drop_remainder: bool) -> Self {
        self.drop_remainder = drop_remainder;
        self
    }

    /// Lazily batch `sentences`.
    pub fn batches<I>(&self, sentences: I) -> Batches<I::IntoIter>
    where
        I: IntoIterator<Item = Result<EncodedSentence>>,
    {
        Batches {
            inner:   sentences.into_iter(),
            batcher: *self,
            done:    false,
        }
    }
}

/// Iterator returned by [`PaddedBatcher::batches`].
pub struct Batches<I> {
    inner:   I,
    batcher: PaddedBatcher,
    done:    bool,
}

impl<I> Iterator for Batches<I>
where
    I: Iterator<Item = Result<EncodedSentence>>,
{
    type Item = Result<PaddedBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let size      = self.batcher.batch_size;
        let mut chunk = Vec::with_capacity(size);

        while chunk.len() < size {
            match self.inner.next() {
                Some(Ok(sentence)) => chunk.push(sentence),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if chunk.is_empty() {
            return None;
        }

        if chunk.len() < size && self.batcher.drop_remainder {
            tracing::debug!("Dropping final partial batch of {} sentences", chunk.len());
            return None;
        }

        Some(Ok(PaddedBatch::from_sentences(chunk, self.batcher.pad_value)))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::annotator::annotate;

    fn stream(rows: &[&[i64]]) -> Vec<Result<EncodedSentence>> {
        rows.iter().map(|r| Ok(annotate(r.to_vec()))).collect()
    }

    #[test]
    fn test_two_sentence_scenario() {
        let batcher = PaddedBatcher::new(2).unwrap();
        let batches: Vec<PaddedBatch> = batcher
            .batches(stream(&[&[0, 1, 2], &[3]]))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].ids, vec![vec![0, 1, 2], vec![3, 0, 0]]);
        assert_eq!(batches[0].lengths, vec![3, 1]);
    }

    #[test]
    fn test_max_length_is_per_batch() {
        let batcher = PaddedBatcher::new(2).unwrap();
        let batches: Vec<PaddedBatch> = batcher
            .batches(stream(&[&[1, 2, 3, 4, 5], &[6], &[7], &[8, 9]]))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(batches[0].max_length, 5);
        assert_eq!(batches[1].max_length, 2);
        for b in &batches {
            let longest = b.lengths.iter().copied().max().unwrap();
            assert_eq!(longest, b.max_length);
            assert!(b.ids.iter().all(|row| row.len() == b.max_length));
        }
    }

    #[test]
    fn test_remainder_is_emitted_short_by_default() {
        let batcher = PaddedBatcher::new(2).unwrap();
        let batches: Vec<PaddedBatch> = batcher
            .batches(stream(&[&[1], &[2], &[3]]))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].rows(), 1);
        assert_eq!(batches[1].ids, vec![vec![3]]);
    }

    #[test]
    fn test_remainder_is_dropped_when_requested() {
        let batcher = PaddedBatcher::new(2).unwrap().with_drop_remainder(true);
        let batches: Vec<PaddedBatch> = batcher
            .batches(stream(&[&[1], &[2], &[3]]))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].rows(), 2);
    }

    #[test]
    fn test_padding_beyond_length_uses_pad_value() {
        let batcher = PaddedBatcher::new(3).unwrap().with_pad_value(99);
        let batch = batcher
            .batches(stream(&[&[], &[1, 2, 3], &[4]]))
            .next()
            .unwrap()
            .unwrap();

        for (row, &len) in batch.ids.iter().zip(&batch.lengths) {
            assert!(row[len..].iter().all(|&v| v == 99));
        }
        assert_eq!(batch.ids[0], vec![99, 99, 99]);
    }

    #[test]
    fn test_upstream_error_ends_stream() {
        let mut items = stream(&[&[1]]);
        items.push(Err(PipelineError::Tokenize("boom".into())));
        items.extend(stream(&[&[2], &[3]]));

        let batcher = PaddedBatcher::new(2).unwrap();
        let mut it  = batcher.batches(items);
        assert!(matches!(it.next(), Some(Err(PipelineError::Tokenize(_)))));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let batcher = PaddedBatcher::new(4).unwrap();
        assert!(batcher.batches(Vec::new()).next().is_none());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(matches!(
            PaddedBatcher::new(0),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}
