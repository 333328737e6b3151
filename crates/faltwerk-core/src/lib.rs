//! # Faltwerk Core
//!
//! Document-aware k-fold cross-validation splitting for tab-separated
//! annotation corpora. Groups lines into documents by their content hash,
//! partitions them into disjoint train/dev/test folds and serializes every
//! partition into the per-field files consumed by a downstream
//! sequence-labeling trainer.
//!
//! ## Quick Start
//!
//! ```rust
//! use faltwerk_core::corpus::Item;
//! use faltwerk_core::fold::{SplitRng, kfold_split};
//!
//! let items: Vec<Item> = (0..9).map(|i| Item::Line(format!("zeile {i}"))).collect();
//! let mut rng = SplitRng::with_seed(7);
//!
//! let folds = kfold_split(items, 3, true, &mut rng).unwrap();
//! assert_eq!(folds.len(), 3);
//! ```
pub mod corpus;
pub mod error;
pub mod export;
pub mod filter;
pub mod fold;
pub mod pipeline;
pub mod record;
pub mod vocab;

// Re-export primary API
pub use corpus::{Document, Item, group_documents};
pub use error::{FaltwerkError, Result};
pub use export::{ExportFile, FoldExporter};
pub use filter::{filter_by_docids, strip_unknown_lines};
pub use fold::{Fold, SplitRng, kfold_split, split_by_percentage};
pub use pipeline::{SplitConfig, read_lines, run_split, write_lines};
pub use record::{FieldLabel, RecordParser};
pub use vocab::build_vocabulary;
