//! # Fold Partitioning
//!
//! Splits a corpus (documents or raw lines) into `num_folds` chunks and
//! builds one train/dev/test fold per chunk acting as the test set. Chunk
//! order is shuffled at most once per call, so all folds of one invocation
//! share the same chunk order.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::corpus::Item;
use crate::error::{FaltwerkError, Result};

/// Random source behind every shuffle and dev-chunk pick.
///
/// Production callers seed from the clock, so runs are not reproducible
/// across invocations; tests pin a seed to get identical folds.
pub struct SplitRng {
    inner: oorandom::Rand32,
}

impl SplitRng {
    /// Seeds from the current time.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(nanos)
    }

    /// Seeds with a fixed value for reproducible splits.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: oorandom::Rand32::new(seed),
        }
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn pick(&mut self, n: usize) -> usize {
        self.inner.rand_range(0..n as u32) as usize
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}

/// One train/dev/test assignment out of `num_folds` total.
///
/// The three partitions are disjoint and together cover every input item
/// exactly once. Items are flattened to their raw lines on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    train: Vec<String>,
    dev: Vec<String>,
    test: Vec<String>,
}

impl Fold {
    /// Builds a fold from item partitions, flattening documents to lines.
    ///
    /// # Errors
    ///
    /// Returns `FaltwerkError::InvalidConfig` if the train or test set
    /// would be empty. The dev set may be empty.
    pub fn from_items(train: Vec<Item>, dev: Vec<Item>, test: Vec<Item>) -> Result<Self> {
        let train = flatten(train);
        let test = flatten(test);
        if train.is_empty() {
            return Err(FaltwerkError::InvalidConfig(
                "fold train set is empty".into(),
            ));
        }
        if test.is_empty() {
            return Err(FaltwerkError::InvalidConfig("fold test set is empty".into()));
        }
        Ok(Self {
            train,
            dev: flatten(dev),
            test,
        })
    }

    /// Raw lines of the training partition.
    pub fn train_set(&self) -> &[String] {
        &self.train
    }

    /// Raw lines of the dev partition.
    pub fn dev_set(&self) -> &[String] {
        &self.dev
    }

    /// Raw lines of the test partition.
    pub fn test_set(&self) -> &[String] {
        &self.test
    }
}

fn flatten(items: Vec<Item>) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        item.flatten_into(&mut lines);
    }
    lines
}

/// Splits `items` into k folds for cross-validation.
///
/// Chunks the items into `ceil(len / num_folds)`-sized contiguous slices,
/// optionally shuffles the chunk list once, then emits one fold per chunk
/// acting as the test set. The dev chunk is drawn uniformly per fold from
/// the remaining chunks; everything else becomes train, in chunk order.
///
/// # Errors
///
/// Returns `FaltwerkError::InvalidConfig` if `num_folds <= 2`, if `items`
/// is empty, or if chunking yields fewer than three chunks (train, dev and
/// test could not be disjoint and non-empty).
pub fn kfold_split(
    items: Vec<Item>,
    num_folds: usize,
    shuffle_chunks: bool,
    rng: &mut SplitRng,
) -> Result<Vec<Fold>> {
    if num_folds <= 2 {
        return Err(FaltwerkError::InvalidConfig(format!(
            "num_folds must be greater than 2, got {num_folds}"
        )));
    }
    if items.is_empty() {
        return Err(FaltwerkError::InvalidConfig(
            "cannot split an empty corpus".into(),
        ));
    }

    let chunk_size = items.len().div_ceil(num_folds);
    let mut chunks: Vec<Vec<Item>> = Vec::with_capacity(num_folds);
    let mut rest = items;
    while !rest.is_empty() {
        let tail = rest.split_off(rest.len().min(chunk_size));
        chunks.push(rest);
        rest = tail;
    }

    for (idx, chunk) in chunks.iter().enumerate() {
        debug!(chunk = idx, items = chunk.len(), "chunk built");
    }

    if chunks.len() < 3 {
        return Err(FaltwerkError::InvalidConfig(format!(
            "{num_folds} folds over {} chunks cannot yield disjoint train, dev and test sets",
            chunks.len()
        )));
    }

    if shuffle_chunks {
        rng.shuffle(&mut chunks);
    }

    let mut folds = Vec::with_capacity(chunks.len());
    for test_idx in 0..chunks.len() {
        // draw the dev chunk uniformly from all chunks but the test chunk
        let mut dev_idx = rng.pick(chunks.len());
        while dev_idx == test_idx {
            dev_idx = rng.pick(chunks.len());
        }

        let mut train = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i != test_idx && i != dev_idx {
                train.extend(chunk.iter().cloned());
            }
        }

        folds.push(Fold::from_items(
            train,
            chunks[dev_idx].clone(),
            chunks[test_idx].clone(),
        )?);
    }

    Ok(folds)
}

/// Splits lines into two parts at `percent` / `100 - percent`.
///
/// The split is exact: every line lands in exactly one of the two parts.
///
/// # Errors
///
/// Returns `FaltwerkError::InvalidConfig` if `percent` is not in `1..=99`.
pub fn split_by_percentage(
    mut lines: Vec<String>,
    percent: u32,
) -> Result<(Vec<String>, Vec<String>)> {
    if percent == 0 || percent >= 100 {
        return Err(FaltwerkError::InvalidConfig(format!(
            "split percentage must be between 1 and 99, got {percent}"
        )));
    }
    let cut = lines.len() * percent as usize / 100;
    let tail = lines.split_off(cut);
    Ok((lines, tail))
}
