//! Vocabulary extraction from source-token files.

use std::collections::BTreeSet;

/// The unique whitespace-separated tokens of the corpus, sorted.
pub fn build_vocabulary(lines: &[String]) -> Vec<String> {
    let mut vocab = BTreeSet::new();
    for line in lines {
        for word in line.split_whitespace() {
            vocab.insert(word.to_string());
        }
    }
    vocab.into_iter().collect()
}
