// ============================================================
// Layer 4 - Pipeline
// ============================================================
// Wires the stages together:
//
//   LineSource → WhitespaceTokenizer → TokenLookup
//       → annotate → [shuffle buffer] → PaddedBatcher
//
// Everything is pull-based: a line is only read when the next
// batch asks for one more sentence. Each epoch asks the source
// for a fresh pass, so the corpus is re-read from line one.

use std::iter;

use crate::application::pipeline_config::PipelineConfig;
use crate::data::{
    annotator::{annotate, encode_tokens},
    batcher::{Batches, PaddedBatcher},
    line_reader::LineReader,
    shuffle::shuffle_buffer,
    tokenizer::WhitespaceTokenizer,
    vocabulary::Vocabulary,
};
use crate::domain::{
    sentence::EncodedSentence,
    traits::{LineSource, TokenLookup},
};
use crate::error::Result;

/// Boxed stream of encoded sentences borrowed from a pipeline
pub type SentenceStream<'a> = Box<dyn Iterator<Item = Result<EncodedSentence>> + 'a>;

pub struct Pipeline<S = LineReader, L = Vocabulary> {
    source:    S,
    lookup:    L,
    tokenizer: WhitespaceTokenizer,
    batcher:   PaddedBatcher,
    config:    PipelineConfig,
}

impl Pipeline<LineReader, Vocabulary> {
    /// Load the vocabulary and open the corpus named in `config`.
    pub fn open(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let lookup = Vocabulary::load(&config.vocab_path, config.default_id)?;
        let source = LineReader::open(&config.corpus_path)?;
        Self::new(source, lookup, config)
    }
}

impl<S: LineSource, L: TokenLookup> Pipeline<S, L> {
    pub fn new(source: S, lookup: L, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let batcher = PaddedBatcher::new(config.batch_size)?
            .with_pad_value(config.pad_value)
            .with_drop_remainder(config.drop_remainder);

        Ok(Self {
            source,
            lookup,
            tokenizer: WhitespaceTokenizer::new(),
            batcher,
            config,
        })
    }

    /// Tokenize, look up and annotate a single line.
    pub fn encode_line(&self, line: &str) -> Result<EncodedSentence> {
        let tokens = self.tokenizer.tokenize(line)?;
        Ok(annotate(encode_tokens(&self.lookup, &tokens)))
    }

    /// One pass over the corpus in file order, without shuffling.
    pub fn encode_pass(&self) -> Result<SentenceStream<'_>> {
        let lines = self.source.lines()?;
        Ok(Box::new(lines.map(move |line| line.and_then(|l| self.encode_line(&l)))))
    }

    /// All epochs chained, passed through the shuffle buffer if one
    /// is configured.
    pub fn sentences<'a>(&'a self) -> SentenceStream<'a> {
        let epochs = self.config.epochs;

        let passes = (1..=epochs).flat_map(move |epoch| -> SentenceStream<'a> {
            tracing::debug!("Starting epoch {}/{}", epoch, epochs);
            match self.encode_pass() {
                Ok(pass) => pass,
                Err(e) => Box::new(iter::once(Err::<EncodedSentence, _>(e))),
            }
        });

        match self.config.shuffle_buffer {
            Some(capacity) => Box::new(shuffle_buffer(passes, capacity, self.config.seed)),
            None => Box::new(passes),
        }
    }

    /// The full stream of padded batches.
    pub fn batches(&self) -> Batches<SentenceStream<'_>> {
        self.batcher.batches(self.sentences())
    }
}
