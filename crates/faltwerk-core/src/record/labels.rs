//! # Target Labels
//!
//! The label set annotated on corpus lines. Labels originate from SAP
//! invoice table field codes and are translated to human-readable German
//! words before being handed to the trainer.

use std::fmt;

/// Invoice field labels as annotated in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    /// No meaningful field value applies (the UNK label).
    Unknown,
    /// XBLNR, the invoice number.
    InvoiceNumber,
    /// EBELN, the purchase order number.
    OrderNumber,
    /// REDAT, the invoice date.
    InvoiceDate,
    /// WRBTR, the gross amount.
    GrossAmount,
    /// WMWST, the tax amount.
    TaxAmount,
    /// VAT_NUMBER, the VAT registration id.
    VatNumber,
}

impl FieldLabel {
    /// Total number of distinct labels.
    pub const NUM_LABELS: usize = 7;

    /// Get all labels in order.
    pub fn all_labels() -> &'static [FieldLabel] {
        &[
            FieldLabel::Unknown,
            FieldLabel::InvoiceNumber,
            FieldLabel::OrderNumber,
            FieldLabel::InvoiceDate,
            FieldLabel::GrossAmount,
            FieldLabel::TaxAmount,
            FieldLabel::VatNumber,
        ]
    }

    /// The raw field code as it appears in annotation lines.
    pub fn code(&self) -> &'static str {
        match self {
            FieldLabel::Unknown => "UNKNOWN",
            FieldLabel::InvoiceNumber => "XBLNR",
            FieldLabel::OrderNumber => "EBELN",
            FieldLabel::InvoiceDate => "REDAT",
            FieldLabel::GrossAmount => "WRBTR",
            FieldLabel::TaxAmount => "WMWST",
            FieldLabel::VatNumber => "VAT_NUMBER",
        }
    }

    /// The human-readable German word written to `.tgt` files.
    pub fn german(&self) -> &'static str {
        match self {
            FieldLabel::Unknown => "unbekannt",
            FieldLabel::InvoiceNumber => "rechnungsnummer",
            FieldLabel::OrderNumber => "bestellnummer",
            FieldLabel::InvoiceDate => "rechnungsdatum",
            FieldLabel::GrossAmount => "gesamtbetrag",
            FieldLabel::TaxAmount => "steuerbetrag",
            FieldLabel::VatNumber => "uid-nummer",
        }
    }

    /// Get the label for a raw field code.
    pub fn from_code(code: &str) -> Option<Self> {
        FieldLabel::all_labels()
            .iter()
            .copied()
            .find(|label| label.code() == code)
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.german())
    }
}

/// Replaces every known field code in `span` with its German label.
///
/// Codes are mutually exclusive substrings, so the replacement order does
/// not matter. Codes outside the table pass through unchanged.
pub fn translate_codes(span: &str) -> String {
    let mut out = span.to_string();
    for label in FieldLabel::all_labels() {
        out = out.replace(label.code(), label.german());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for label in FieldLabel::all_labels() {
            let recovered = FieldLabel::from_code(label.code()).unwrap();
            assert_eq!(*label, recovered);
        }
    }

    #[test]
    fn test_translate_known_codes() {
        assert_eq!(translate_codes("XBLNR"), "rechnungsnummer");
        assert_eq!(translate_codes("UNKNOWN"), "unbekannt");
        assert_eq!(translate_codes("VAT_NUMBER"), "uid-nummer");
    }

    #[test]
    fn test_translate_unknown_code_passes_through() {
        assert_eq!(translate_codes("FOOBAR"), "FOOBAR");
    }

    #[test]
    fn test_display_is_german() {
        assert_eq!(FieldLabel::InvoiceDate.to_string(), "rechnungsdatum");
        assert_eq!(FieldLabel::Unknown.to_string(), "unbekannt");
    }

    #[test]
    fn test_all_labels_count() {
        assert_eq!(FieldLabel::all_labels().len(), FieldLabel::NUM_LABELS);
    }
}
