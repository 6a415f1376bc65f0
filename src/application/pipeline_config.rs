// ============================================================
// Layer 2 - Pipeline Configuration
// ============================================================
// Everything a run needs to know. Serialisable so a run can be
// saved to JSON and replayed later with --config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub corpus_path:    PathBuf,
    pub vocab_path:     PathBuf,
    pub batch_size:     usize,
    /// Id assigned to tokens missing from the vocabulary
    pub default_id:     i64,
    pub pad_value:      i64,
    /// Drop the final batch when it has fewer than batch_size rows
    pub drop_remainder: bool,
    pub epochs:         usize,
    /// Shuffle buffer capacity; None keeps corpus order
    pub shuffle_buffer: Option<usize>,
    pub seed:           u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            corpus_path:    PathBuf::from("data/corpus.txt"),
            vocab_path:     PathBuf::from("data/vocab.txt"),
            batch_size:     32,
            default_id:     0,
            pad_value:      0,
            drop_remainder: false,
            epochs:         1,
            shuffle_buffer: None,
            seed:           42,
        }
    }
}

impl PipelineConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "batch_size must be a positive integer".to_string(),
            ));
        }
        if self.epochs == 0 {
            return Err(PipelineError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.shuffle_buffer == Some(0) {
            return Err(PipelineError::InvalidConfig(
                "shuffle_buffer must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
