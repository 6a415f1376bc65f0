// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// File formats that sit around the pipeline rather than in it:
//
//   config_store.rs  - PipelineConfig to and from JSON
//
//   vocab_builder.rs - Counts token frequencies over a corpus and
//                      writes a vocabulary file the Vocabulary
//                      lookup can load

/// PipelineConfig JSON persistence
pub mod config_store;

/// Vocabulary file generation from a corpus
pub mod vocab_builder;
