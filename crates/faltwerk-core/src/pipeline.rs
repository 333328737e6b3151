//! # Split Pipeline
//!
//! The end-to-end driver: reads the corpus, builds items at document or
//! line granularity, partitions them into folds and writes one `FOLD<n>`
//! directory per fold with the twelve per-field files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::corpus::{Item, group_documents};
use crate::error::{FaltwerkError, Result};
use crate::export::FoldExporter;
use crate::fold::{SplitRng, kfold_split};
use crate::record::RecordParser;

/// Configuration of one split run.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input corpus file, one annotation record per line.
    pub corpus: PathBuf,
    /// Directory receiving the `FOLD<n>` subdirectories.
    pub output_dir: PathBuf,
    /// Number of cross-validation folds; must be greater than 2.
    pub num_folds: usize,
    /// Split at document granularity instead of raw lines.
    pub by_document: bool,
    /// Shuffle the item sequence before chunking.
    pub shuffle_items: bool,
    /// Shuffle the chunk list before fold assignment.
    pub shuffle_chunks: bool,
    /// Fixed seed for reproducible splits; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl SplitConfig {
    /// Configuration with both shuffles enabled and a clock-based seed.
    pub fn new(
        corpus: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        num_folds: usize,
        by_document: bool,
    ) -> Self {
        Self {
            corpus: corpus.into(),
            output_dir: output_dir.into(),
            num_folds,
            by_document,
            shuffle_items: true,
            shuffle_chunks: true,
            seed: None,
        }
    }
}

/// Reads a UTF-8 text file into lines (trailing newlines stripped).
///
/// # Errors
///
/// Returns `FaltwerkError::Io` with the path if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| FaltwerkError::io(path, e))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Writes lines to a file, newline-terminated, overwriting any old content.
///
/// # Errors
///
/// Returns `FaltwerkError::Io` with the path if the write fails.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    fs::write(path, text).map_err(|e| FaltwerkError::io(path, e))
}

/// Runs the whole split pipeline described by `config`.
///
/// # Errors
///
/// Fatal on the first malformed record, invalid configuration or I/O
/// failure. No partial output is cleaned up, so the failure state stays
/// inspectable on disk.
pub fn run_split(config: &SplitConfig) -> Result<()> {
    // front-loaded so nothing is written for an impossible configuration
    if config.num_folds <= 2 {
        return Err(FaltwerkError::InvalidConfig(format!(
            "num_folds must be greater than 2, got {}",
            config.num_folds
        )));
    }

    let lines = read_lines(&config.corpus)?;
    if lines.is_empty() {
        return Err(FaltwerkError::InvalidConfig(format!(
            "corpus {} is empty",
            config.corpus.display()
        )));
    }

    let mut items: Vec<Item> = if config.by_document {
        let parser = RecordParser::new()?;
        let docs = group_documents(&lines, &parser)?;
        info!(documents = docs.len(), "grouped corpus into documents");
        docs.into_iter().map(Item::Document).collect()
    } else {
        lines.into_iter().map(Item::Line).collect()
    };

    let mut rng = match config.seed {
        Some(seed) => SplitRng::with_seed(seed),
        None => SplitRng::from_entropy(),
    };

    if config.shuffle_items {
        rng.shuffle(&mut items);
    }

    let folds = kfold_split(items, config.num_folds, config.shuffle_chunks, &mut rng)?;

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| FaltwerkError::io(&config.output_dir, e))?;

    let exporter = FoldExporter::new()?;
    for (ordinal, fold) in folds.iter().enumerate() {
        let fold_dir = config.output_dir.join(format!("FOLD{}", ordinal + 1));
        fs::create_dir_all(&fold_dir).map_err(|e| FaltwerkError::io(&fold_dir, e))?;
        info!(path = %fold_dir.display(), "fold directory created");

        for file in exporter.generate(fold)? {
            let path = fold_dir.join(&file.name);
            write_lines(&path, &file.lines)?;
            info!(path = %path.display(), lines = file.lines.len(), "set written");
        }
    }

    Ok(())
}
