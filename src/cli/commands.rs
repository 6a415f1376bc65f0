// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Four subcommands: `batch`, `tensors`, `lookup`, `build-vocab`.
// clap's derive macros generate the --help text, the error
// messages for bad input and the string → number conversions.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::pipeline_config::PipelineConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream padded batches from a corpus as JSON lines
    Batch(BatchArgs),

    /// Produce the same batches as burn tensors and print their shapes
    Tensors(BatchArgs),

    /// Print the vocabulary id of each given token
    Lookup(LookupArgs),

    /// Build a vocabulary file from a corpus
    BuildVocab(BuildVocabArgs),
}

/// Arguments shared by `batch` and `tensors`.
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Corpus file, one sentence per line
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: PathBuf,

    /// Vocabulary file, one token per line (id = line number)
    #[arg(long, default_value = "data/vocab.txt")]
    pub vocab: PathBuf,

    /// Sentences per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Id used for tokens missing from the vocabulary
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub default_id: i64,

    /// Value written past the end of shorter rows
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub pad_value: i64,

    /// Drop the last batch if it has fewer than batch_size rows
    #[arg(long)]
    pub drop_remainder: bool,

    /// Passes over the corpus
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,

    /// Shuffle through a buffer of this many sentences
    #[arg(long)]
    pub shuffle_buffer: Option<usize>,

    /// Seed for shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Load every pipeline setting from this JSON file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings to this JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

/// Convert CLI BatchArgs into the application-layer PipelineConfig.
/// `config` and `save_config` are handled by the CLI itself.
impl From<BatchArgs> for PipelineConfig {
    fn from(a: BatchArgs) -> Self {
        PipelineConfig {
            corpus_path:    a.corpus,
            vocab_path:     a.vocab,
            batch_size:     a.batch_size,
            default_id:     a.default_id,
            pad_value:      a.pad_value,
            drop_remainder: a.drop_remainder,
            epochs:         a.epochs,
            shuffle_buffer: a.shuffle_buffer,
            seed:           a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    #[arg(long, default_value = "data/vocab.txt")]
    pub vocab: PathBuf,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub default_id: i64,

    /// Tokens to look up
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BuildVocabArgs {
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: PathBuf,

    /// Where to write the vocabulary
    #[arg(long, default_value = "data/vocab.txt")]
    pub output: PathBuf,

    /// Minimum number of occurrences for a token to be kept
    #[arg(long, default_value_t = 1)]
    pub min_count: usize,

    /// Maximum vocabulary size, including the <unk> line
    #[arg(long)]
    pub max_size: Option<usize>,
}
