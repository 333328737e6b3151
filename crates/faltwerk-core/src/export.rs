//! # Dataset Export
//!
//! Serializes each fold partition into the four per-field sequences the
//! downstream trainer consumes: source tokens, target labels, document
//! ids and bounding boxes. All four sequences of one partition are
//! line-aligned: index `i` of every sequence belongs to the same input
//! line.

use crate::error::Result;
use crate::fold::Fold;
use crate::record::{RecordParser, is_blank};

/// Filename suffix of source-token files.
pub const SRC_SUFFIX: &str = ".src";
/// Filename suffix of target-label files.
pub const TGT_SUFFIX: &str = ".tgt";
/// Filename suffix of document-id files.
pub const DOC_SUFFIX: &str = ".docid";
/// Filename suffix of bounding-box files.
pub const BBX_SUFFIX: &str = ".bbox";

/// One output file of a fold directory: its name (e.g. `train.src`) and
/// its lines, ready to be written newline-terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Filename relative to the fold directory.
    pub name: String,
    /// File contents, one entry per line.
    pub lines: Vec<String>,
}

/// Extracts the per-field sequences of every fold partition.
pub struct FoldExporter {
    parser: RecordParser,
}

impl FoldExporter {
    /// Constructs a new exporter.
    ///
    /// # Errors
    ///
    /// Returns `FaltwerkError::Regex` if the record patterns fail to
    /// compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: RecordParser::new()?,
        })
    }

    /// All twelve output files of one fold.
    ///
    /// Partitions are emitted in train, test, dev order, each as its four
    /// field files in src, tgt, docid, bbox order.
    ///
    /// # Errors
    ///
    /// Returns a parser error if any partition line lacks a docid or a
    /// target label span.
    pub fn generate(&self, fold: &Fold) -> Result<Vec<ExportFile>> {
        let partitions = [
            ("train", fold.train_set()),
            ("test", fold.test_set()),
            ("dev", fold.dev_set()),
        ];

        let mut files = Vec::with_capacity(partitions.len() * 4);
        for (partition, lines) in partitions {
            files.push(ExportFile {
                name: format!("{partition}{SRC_SUFFIX}"),
                lines: self.source_set(lines),
            });
            files.push(ExportFile {
                name: format!("{partition}{TGT_SUFFIX}"),
                lines: self.target_set(lines)?,
            });
            files.push(ExportFile {
                name: format!("{partition}{DOC_SUFFIX}"),
                lines: self.docid_set(lines)?,
            });
            files.push(ExportFile {
                name: format!("{partition}{BBX_SUFFIX}"),
                lines: self.bbox_set(lines),
            });
        }

        Ok(files)
    }

    fn source_set(&self, data: &[String]) -> Vec<String> {
        data.iter()
            .filter(|line| !is_blank(line))
            .map(|line| self.parser.source(line))
            .collect()
    }

    fn target_set(&self, data: &[String]) -> Result<Vec<String>> {
        let mut targets = Vec::new();
        for line in data {
            if is_blank(line) {
                continue;
            }
            targets.push(self.parser.target(line)?);
        }
        trim_trailing_blank(&mut targets);
        Ok(targets)
    }

    fn docid_set(&self, data: &[String]) -> Result<Vec<String>> {
        let mut docids = Vec::new();
        for line in data {
            if is_blank(line) {
                continue;
            }
            docids.push(self.parser.docid(line)?.to_string());
        }
        trim_trailing_blank(&mut docids);
        Ok(docids)
    }

    fn bbox_set(&self, data: &[String]) -> Vec<String> {
        data.iter()
            .filter(|line| !is_blank(line))
            .map(|line| self.parser.bbox(line))
            .collect()
    }
}

// Guards against an accidental trailing empty annotation.
fn trim_trailing_blank(lines: &mut Vec<String>) {
    if lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Item;

    fn hex_id(seed: u8) -> String {
        format!("{seed:040x}")
    }

    fn record(tokens: &str, code: &str, docid: &str, bbox: &str) -> String {
        format!("{tokens} \t{code}\t{docid}\t{bbox}")
    }

    fn sample_fold() -> Fold {
        let id_a = hex_id(0xA);
        let id_b = hex_id(0xB);
        let id_c = hex_id(0xC);
        let train = vec![
            Item::Line(record("rechnung nr 574", "XBLNR", &id_a, "10 20 30 40")),
            Item::Line(record("betrag 120 50", "WRBTR", &id_a, "50 60 70 80")),
        ];
        let dev = vec![Item::Line(record(
            "datum 01 02 2019",
            "REDAT",
            &id_b,
            "90 10 11 12",
        ))];
        let test = vec![Item::Line(record(
            "irgendein text",
            "UNKNOWN",
            &id_c,
            "13 14 15 16",
        ))];
        Fold::from_items(train, dev, test).unwrap()
    }

    #[test]
    fn test_twelve_files_in_fixed_order() {
        let exporter = FoldExporter::new().unwrap();
        let files = exporter.generate(&sample_fold()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "train.src",
                "train.tgt",
                "train.docid",
                "train.bbox",
                "test.src",
                "test.tgt",
                "test.docid",
                "test.bbox",
                "dev.src",
                "dev.tgt",
                "dev.docid",
                "dev.bbox",
            ]
        );
    }

    #[test]
    fn test_field_sequences_are_aligned() {
        let exporter = FoldExporter::new().unwrap();
        let files = exporter.generate(&sample_fold()).unwrap();

        for partition in files.chunks(4) {
            let len = partition[0].lines.len();
            for file in partition {
                assert_eq!(file.lines.len(), len, "misaligned: {}", file.name);
            }
        }
    }

    #[test]
    fn test_fields_correspond_index_for_index() {
        let exporter = FoldExporter::new().unwrap();
        let files = exporter.generate(&sample_fold()).unwrap();

        // train partition of sample_fold: two lines of document A
        assert_eq!(files[0].lines, vec!["rechnung nr 574", "betrag 120 50"]);
        assert_eq!(files[1].lines, vec!["rechnungsnummer", "gesamtbetrag"]);
        assert_eq!(files[2].lines, vec![hex_id(0xA), hex_id(0xA)]);
        assert_eq!(files[3].lines, vec!["10 20 30 40", "50 60 70 80"]);
    }

    #[test]
    fn test_blank_lines_are_dropped_from_all_fields() {
        let id = hex_id(1);
        let train = vec![
            Item::Line(record("eins", "UNKNOWN", &id, "1 2 3 4")),
            Item::Line("   ".to_string()),
            Item::Line(record("zwei", "UNKNOWN", &id, "5 6 7 8")),
        ];
        let test = vec![Item::Line(record("drei", "UNKNOWN", &id, "9 9 9 9"))];
        let fold = Fold::from_items(train, Vec::new(), test).unwrap();

        let exporter = FoldExporter::new().unwrap();
        let files = exporter.generate(&fold).unwrap();

        for file in files.iter().take(4) {
            assert_eq!(file.lines.len(), 2, "blank leaked into {}", file.name);
        }
    }

    #[test]
    fn test_empty_dev_partition_yields_empty_files() {
        let id = hex_id(2);
        let train = vec![Item::Line(record("eins", "UNKNOWN", &id, "1 2 3 4"))];
        let test = vec![Item::Line(record("zwei", "UNKNOWN", &id, "5 6 7 8"))];
        let fold = Fold::from_items(train, Vec::new(), test).unwrap();

        let exporter = FoldExporter::new().unwrap();
        let files = exporter.generate(&fold).unwrap();

        assert_eq!(files.len(), 12);
        for file in &files[8..] {
            assert!(file.lines.is_empty(), "{} not empty", file.name);
        }
    }
}
