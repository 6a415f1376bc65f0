// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything from a text file on disk to padded batches.
//
//   corpus.txt
//       │
//       ▼
//   LineReader          → one line at a time, restartable
//       │
//       ▼
//   WhitespaceTokenizer → tokens
//       │
//       ▼
//   Vocabulary          → ids (unknown → default id)
//       │
//       ▼
//   annotate            → (ids, length)
//       │
//       ▼
//   shuffle buffer      → optional, seeded
//       │
//       ▼
//   PaddedBatcher       → ids [rows, max_len] + lengths
//
// SentenceDataset and SentenceBatcher offer the same result as
// burn tensors through burn's DataLoader.

/// Restartable line-by-line file reader
pub mod line_reader;

/// Whitespace tokenisation
pub mod tokenizer;

/// Token → id lookup table loaded from a vocabulary file
pub mod vocabulary;

/// Id encoding and length annotation
pub mod annotator;

/// Seeded streaming shuffle buffer
pub mod shuffle;

/// Groups sentences into padded batches
pub mod batcher;

/// Composes the stages into one pull-based stream
pub mod pipeline;

/// Implements burn's Dataset trait for encoded sentences
pub mod dataset;

/// Implements burn's Batcher trait to create tensor batches
pub mod tensor_batcher;
