// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case in Layer 2. Batches and lookups go to stdout; logs go
// to stderr so the output can be piped.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;

use commands::{BatchArgs, BuildVocabArgs, Commands, LookupArgs};
use crate::application::pipeline_config::PipelineConfig;
use crate::infra::config_store::{load_config, save_config};

#[derive(Parser, Debug)]
#[command(
    name = "text-batch-loader",
    version,
    about = "Turn a text corpus into padded, vocabulary-encoded batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Batch(args)      => run_batch(args),
            Commands::Tensors(args)    => run_tensors(args),
            Commands::Lookup(args)     => run_lookup(args),
            Commands::BuildVocab(args) => run_build_vocab(args),
        }
    }
}

/// Settings come from --config when given, otherwise from flags.
/// Either way they are validated and optionally saved.
fn resolve_config(args: BatchArgs) -> Result<PipelineConfig> {
    let save_path = args.save_config.clone();

    let cfg = match args.config.clone() {
        Some(path) => load_config(&path)?,
        None       => args.into(),
    };
    cfg.validate()?;

    if let Some(path) = save_path {
        save_config(&path, &cfg)?;
    }
    Ok(cfg)
}

fn run_batch(args: BatchArgs) -> Result<()> {
    use crate::application::batch_use_case::BatchUseCase;

    let cfg    = resolve_config(args)?;
    let stdout = io::stdout();
    BatchUseCase::new(cfg).execute(&mut stdout.lock())?;
    Ok(())
}

fn run_tensors(args: BatchArgs) -> Result<()> {
    use crate::application::tensor_use_case::TensorUseCase;

    let cfg    = resolve_config(args)?;
    let stdout = io::stdout();
    TensorUseCase::new(cfg).execute(&mut stdout.lock())?;
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<()> {
    use crate::application::vocab_use_case::LookupUseCase;

    let use_case = LookupUseCase::new(args.vocab, args.default_id)?;
    let stdout   = io::stdout();
    use_case.execute(&args.tokens, &mut stdout.lock())
}

fn run_build_vocab(args: BuildVocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::BuildVocabUseCase;

    let use_case = BuildVocabUseCase::new(
        args.corpus,
        args.output.clone(),
        args.min_count,
        args.max_size,
    );
    let written = use_case.execute()?;
    println!("Wrote {} tokens to {}", written, args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "text-batch-loader", "batch",
            "--corpus", "c.txt", "--vocab", "v.txt",
            "--batch-size", "4", "--pad-value", "-1",
            "--drop-remainder", "--shuffle-buffer", "10",
        ])
        .unwrap();

        let Commands::Batch(args) = cli.command else { panic!("expected batch") };
        let cfg = PipelineConfig::from(args);
        assert_eq!(cfg.batch_size, 4);
        assert_eq!(cfg.pad_value, -1);
        assert!(cfg.drop_remainder);
        assert_eq!(cfg.shuffle_buffer, Some(10));
        assert_eq!(cfg.epochs, 1);
    }

    #[test]
    fn test_lookup_requires_tokens() {
        assert!(Cli::try_parse_from(["text-batch-loader", "lookup"]).is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected_before_running() {
        let cli = Cli::try_parse_from(["text-batch-loader", "batch", "--batch-size", "0"]).unwrap();
        let Commands::Batch(args) = cli.command else { panic!("expected batch") };
        assert!(resolve_config(args).is_err());
    }

    #[test]
    fn test_config_file_overrides_flags_and_is_saved() {
        let dir   = tempfile::tempdir().unwrap();
        let saved = dir.path().join("saved.json");
        let cfg   = PipelineConfig { batch_size: 9, ..Default::default() };
        save_config(&dir.path().join("in.json"), &cfg).unwrap();

        let cli = Cli::try_parse_from([
            "text-batch-loader", "tensors",
            "--batch-size", "2",
            "--config", dir.path().join("in.json").to_str().unwrap(),
            "--save-config", saved.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Tensors(args) = cli.command else { panic!("expected tensors") };

        let resolved = resolve_config(args).unwrap();
        assert_eq!(resolved.batch_size, 9);
        assert_eq!(load_config(&saved).unwrap(), resolved);
    }
}
