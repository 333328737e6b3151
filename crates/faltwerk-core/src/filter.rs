//! # Corpus Filtering
//!
//! Helpers that thin a corpus before splitting: keeping only whitelisted
//! documents, and rebalancing corpora dominated by the UNK label.

use std::collections::HashSet;

use crate::error::Result;
use crate::record::{RecordParser, is_blank};

/// The literal label span marking a line without a meaningful field value.
const UNKNOWN_SPAN: &str = "\tUNKNOWN\t";

/// Keeps only lines whose docid appears in `keep`, preserving order.
///
/// Blank lines are dropped.
///
/// # Errors
///
/// Returns `FaltwerkError::MissingDocid` if a non-blank line lacks a
/// docid token.
pub fn filter_by_docids(
    lines: &[String],
    keep: &HashSet<String>,
    parser: &RecordParser,
) -> Result<Vec<String>> {
    let mut kept = Vec::new();
    for line in lines {
        if is_blank(line) {
            continue;
        }
        if keep.contains(parser.docid(line)?) {
            kept.push(line.clone());
        }
    }
    Ok(kept)
}

/// Drops the first `percent` percent of UNKNOWN-labeled lines.
///
/// The drop count is `ceil(unknown_count * percent / 100)`; all other
/// lines survive in order. Used to cut down the UNK label's dominance
/// before training.
pub fn strip_unknown_lines(lines: &[String], percent: u32) -> Vec<String> {
    let unknown_count = lines
        .iter()
        .filter(|line| line.contains(UNKNOWN_SPAN))
        .count();
    let to_drop = (unknown_count * percent as usize).div_ceil(100);

    let mut dropped = 0;
    let mut kept = Vec::with_capacity(lines.len() - to_drop.min(lines.len()));
    for line in lines {
        if dropped < to_drop && line.contains(UNKNOWN_SPAN) {
            dropped += 1;
        } else {
            kept.push(line.clone());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_id(seed: u8) -> String {
        format!("{seed:040x}")
    }

    fn record(tokens: &str, code: &str, docid: &str) -> String {
        format!("{tokens} \t{code}\t{docid}\t10 20 30 40")
    }

    #[test]
    fn test_filter_preserves_order() {
        let parser = RecordParser::new().unwrap();
        let lines = vec![
            record("eins", "UNKNOWN", &hex_id(1)),
            record("zwei", "UNKNOWN", &hex_id(2)),
            record("drei", "UNKNOWN", &hex_id(1)),
            record("vier", "UNKNOWN", &hex_id(3)),
        ];
        let keep: HashSet<String> = [hex_id(1), hex_id(3)].into_iter().collect();

        let kept = filter_by_docids(&lines, &keep, &parser).unwrap();
        assert_eq!(kept, vec![lines[0].clone(), lines[2].clone(), lines[3].clone()]);
    }

    #[test]
    fn test_filter_skips_blank_lines() {
        let parser = RecordParser::new().unwrap();
        let lines = vec![
            record("eins", "UNKNOWN", &hex_id(1)),
            "  ".to_string(),
        ];
        let keep: HashSet<String> = [hex_id(1)].into_iter().collect();

        let kept = filter_by_docids(&lines, &keep, &parser).unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_strip_unknown_drops_earliest_first() {
        let id = hex_id(1);
        let lines = vec![
            record("eins", "UNKNOWN", &id),
            record("zwei", "XBLNR", &id),
            record("drei", "UNKNOWN", &id),
            record("vier", "UNKNOWN", &id),
            record("fuenf", "UNKNOWN", &id),
        ];

        // 4 UNKNOWN lines, 50% -> drop the first 2 of them
        let kept = strip_unknown_lines(&lines, 50);
        assert_eq!(
            kept,
            vec![lines[1].clone(), lines[3].clone(), lines[4].clone()]
        );
    }

    #[test]
    fn test_strip_unknown_rounds_up() {
        let id = hex_id(2);
        let lines = vec![
            record("eins", "UNKNOWN", &id),
            record("zwei", "UNKNOWN", &id),
            record("drei", "UNKNOWN", &id),
        ];

        // 3 * 50 / 100 = 1.5 -> drops 2
        let kept = strip_unknown_lines(&lines, 50);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_strip_unknown_zero_percent_keeps_all() {
        let id = hex_id(3);
        let lines = vec![record("eins", "UNKNOWN", &id)];
        assert_eq!(strip_unknown_lines(&lines, 0), lines);
    }

    #[test]
    fn test_strip_unknown_ignores_other_labels() {
        let id = hex_id(4);
        let lines = vec![
            record("eins", "XBLNR", &id),
            record("zwei", "WRBTR", &id),
        ];
        assert_eq!(strip_unknown_lines(&lines, 100), lines);
    }
}
