//! Command line surface of the faltwerk corpus normalizer.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use faltwerk_core::filter::{filter_by_docids, strip_unknown_lines};
use faltwerk_core::fold::split_by_percentage;
use faltwerk_core::pipeline::{SplitConfig, read_lines, run_split, write_lines};
use faltwerk_core::record::RecordParser;
use faltwerk_core::vocab::build_vocabulary;

/// CLI arguments
#[derive(Parser)]
#[command(name = "faltwerk")]
#[command(about = "Normalize annotation corpora into k-fold train/dev/test splits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a corpus into FOLD<n> directories of per-field files
    Split {
        /// Input corpus file, one annotation record per line
        corpus: PathBuf,

        /// Directory receiving the FOLD<n> subdirectories
        output_dir: PathBuf,

        /// Number of folds, must be greater than 2
        num_folds: usize,

        /// "true" to split at document granularity, anything else for lines
        by_document: String,

        /// Fixed seed for reproducible folds (default: seeded from the clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the corpus order instead of shuffling items before chunking
        #[arg(long)]
        no_shuffle_items: bool,

        /// Keep the chunk order instead of shuffling chunks before fold assignment
        #[arg(long)]
        no_shuffle_chunks: bool,
    },

    /// Copy only the corpus lines whose docid appears in a filter file
    Filter {
        /// Corpus file to filter
        corpus: PathBuf,

        /// File listing the docids to keep, one per line
        filter_file: PathBuf,

        /// Output file for the kept lines
        output: PathBuf,
    },

    /// Drop a percentage of UNKNOWN-labeled lines to rebalance the corpus
    StripUnknowns {
        /// Corpus file to thin out
        corpus: PathBuf,

        /// Output file for the surviving lines
        output: PathBuf,

        /// Percentage of UNKNOWN lines to drop (0-100)
        percent: u32,
    },

    /// Collect the unique tokens of a source file into a vocabulary
    Vocab {
        /// Source-token file to scan
        input: PathBuf,

        /// Output file, one token per line, sorted
        output: PathBuf,
    },

    /// Split a line file into two parts at a percentage boundary
    PercentageSplit {
        /// Percentage of lines for the first part (1-99)
        percent: u32,

        /// Input line file
        input: PathBuf,

        /// Output prefix; the line count of each part is appended
        output_prefix: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Split {
            corpus,
            output_dir,
            num_folds,
            by_document,
            seed,
            no_shuffle_items,
            no_shuffle_chunks,
        } => {
            let mut config = SplitConfig::new(
                corpus,
                output_dir,
                num_folds,
                by_document.eq_ignore_ascii_case("true"),
            );
            config.seed = seed;
            config.shuffle_items = !no_shuffle_items;
            config.shuffle_chunks = !no_shuffle_chunks;
            run_split(&config).context("split failed")?;
        }

        Commands::Filter {
            corpus,
            filter_file,
            output,
        } => {
            let lines = read_lines(&corpus)?;
            let keep: HashSet<String> = read_lines(&filter_file)?
                .into_iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect();

            let kept = filter_by_docids(&lines, &keep, &RecordParser::new()?)?;
            info!(kept = kept.len(), total = lines.len(), "corpus filtered");
            write_lines(&output, &kept)?;
        }

        Commands::StripUnknowns {
            corpus,
            output,
            percent,
        } => {
            let lines = read_lines(&corpus)?;
            let kept = strip_unknown_lines(&lines, percent);
            info!(
                dropped = lines.len() - kept.len(),
                "unknown-labeled lines dropped"
            );
            write_lines(&output, &kept)?;
        }

        Commands::Vocab { input, output } => {
            let lines = read_lines(&input)?;
            let vocab = build_vocabulary(&lines);
            info!(tokens = vocab.len(), "vocabulary built");
            write_lines(&output, &vocab)?;
        }

        Commands::PercentageSplit {
            percent,
            input,
            output_prefix,
        } => {
            let lines = read_lines(&input)?;
            let (head, tail) = split_by_percentage(lines, percent)?;
            let head_path = PathBuf::from(format!("{output_prefix}{}", head.len()));
            let tail_path = PathBuf::from(format!("{output_prefix}{}", tail.len()));
            write_lines(&head_path, &head)?;
            write_lines(&tail_path, &tail)?;
            info!(
                head = %head_path.display(),
                tail = %tail_path.display(),
                "corpus split by percentage"
            );
        }
    }

    Ok(())
}
