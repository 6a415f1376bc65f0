// ============================================================
// Layer 2 - TensorUseCase
// ============================================================
// Same batches as BatchUseCase, but produced by Burn's
// DataLoader as Int tensors on the CPU (NdArray) backend:
//
//   Step 1: Drain the pipeline's sentence stream (all epochs,
//           shuffle buffer applied) into a SentenceDataset
//   Step 2: Build an in-order DataLoader around SentenceBatcher
//   Step 3: Iterate it once, reporting tensor shapes
//
// Burn always emits the short final batch, so it is dropped here
// when drop_remainder is set.

use anyhow::{Context, Result};
use burn::data::{dataloader::DataLoaderBuilder, dataset::Dataset};
use std::io::Write;

use crate::application::pipeline_config::PipelineConfig;
use crate::data::{
    dataset::SentenceDataset,
    pipeline::Pipeline,
    tensor_batcher::{SentenceBatch, SentenceBatcher},
};

type CpuBackend = burn::backend::NdArray;

pub struct TensorUseCase {
    config: PipelineConfig,
}

impl TensorUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the number of tensor batches produced.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut produced = 0usize;

        self.for_each_batch(|batch| {
            produced += 1;
            writeln!(
                out,
                "batch {}: ids {:?} lengths {:?}",
                produced,
                batch.ids.dims(),
                batch.lengths.dims()
            )?;
            Ok(())
        })?;

        out.flush()?;
        tracing::info!("Produced {} tensor batches", produced);
        Ok(produced)
    }

    fn for_each_batch<F>(&self, mut emit: F) -> Result<()>
    where
        F: FnMut(SentenceBatch<CpuBackend>) -> Result<()>,
    {
        let cfg      = &self.config;
        let pipeline = Pipeline::open(cfg.clone())?;

        // ── Step 1: Materialise the encoded stream ───────────────────────────
        let dataset = SentenceDataset::from_pipeline(&pipeline)
            .context("Failed to encode corpus for tensor batching")?;
        tracing::info!(
            "Encoded {} sentences ({} tokens) over {} epoch(s) into memory",
            dataset.len(),
            dataset.total_tokens(),
            cfg.epochs
        );

        // ── Step 2: DataLoader ───────────────────────────────────────────────
        let device  = burn::backend::ndarray::NdArrayDevice::default();
        let batcher = SentenceBatcher::<CpuBackend>::new(device, cfg.pad_value)?;
        let loader  = DataLoaderBuilder::new(batcher)
            .batch_size(cfg.batch_size)
            .build(dataset);

        // ── Step 3: Single in-order pass ─────────────────────────────────────
        let mut batches = loader.iter().peekable();
        while let Some(batch) = batches.next() {
            let [rows, _] = batch.ids.dims();

            if cfg.drop_remainder && rows < cfg.batch_size && batches.peek().is_none() {
                tracing::debug!("Dropping final partial batch of {} sentences", rows);
                break;
            }
            emit(batch)?;
        }
        Ok(())
    }
}
