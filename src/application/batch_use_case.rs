// ============================================================
// Layer 2 - BatchUseCase
// ============================================================
// Streams the corpus through the pipeline and writes every
// padded batch as one JSON object per line:
//
//   {"ids":[[0,1,2],[3,0,0]],"lengths":[3,1],"max_length":3}
//
// Nothing is buffered beyond the current batch (and the shuffle
// buffer, when enabled).

use anyhow::{Context, Result};
use std::io::Write;

use crate::application::pipeline_config::PipelineConfig;
use crate::data::pipeline::Pipeline;

/// Totals reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub batches:   usize,
    pub sentences: usize,
    pub tokens:    usize,
}

pub struct BatchUseCase {
    config: PipelineConfig,
}

impl BatchUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute<W: Write>(&self, out: &mut W) -> Result<BatchSummary> {
        let cfg = &self.config;

        tracing::info!(
            "Batching '{}' with vocabulary '{}' (batch_size={}, epochs={})",
            cfg.corpus_path.display(),
            cfg.vocab_path.display(),
            cfg.batch_size,
            cfg.epochs
        );

        let pipeline    = Pipeline::open(cfg.clone())?;
        let mut summary = BatchSummary::default();

        for batch in pipeline.batches() {
            let batch = batch.with_context(|| {
                format!("Pipeline failed after {} batches", summary.batches)
            })?;

            serde_json::to_writer(&mut *out, &batch)?;
            writeln!(out)?;

            summary.batches   += 1;
            summary.sentences += batch.rows();
            summary.tokens    += batch.lengths.iter().sum::<usize>();

            tracing::debug!(
                "Batch {}: {} rows, max_length={}",
                summary.batches,
                batch.rows(),
                batch.max_length
            );
        }

        out.flush()?;
        tracing::info!(
            "Emitted {} batches covering {} sentences ({} tokens)",
            summary.batches,
            summary.sentences,
            summary.tokens
        );
        Ok(summary)
    }
}
