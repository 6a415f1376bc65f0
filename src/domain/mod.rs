// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain structs and traits describing what flows through the
// pipeline. Nothing in here touches the filesystem or burn.
//
//   sentence.rs - EncodedSentence (ids + length)
//   batch.rs    - PaddedBatch (rectangular ids + lengths)
//   traits.rs   - TokenLookup and LineSource abstractions

// A tokenised, integer-encoded sentence
pub mod sentence;

// A padded group of encoded sentences
pub mod batch;

// Core abstractions implemented by the data layer
pub mod traits;
