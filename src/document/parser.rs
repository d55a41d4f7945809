//! Document line parser.
//!
//! A document line looks like `Doc40    new schizophrenia drug`: an identifier
//! token followed by whitespace-delimited content words. [`DocumentParser`]
//! pulls the numeric identifier out of the line and hands back the words.
//!
//! # Identifier extraction
//!
//! Every ASCII digit that appears before the first space is part of the
//! identifier, concatenated in the order seen. `Doc40` yields `40`, and so does
//! `D4oc0`. A line with no digits before its first space has no identifier and
//! is not indexed.
//!
//! ```
//! use schiltron::document::parser::DocumentParser;
//!
//! let parsed = DocumentParser::parse("Doc40    new schizophrenia drug").unwrap();
//! assert_eq!(parsed.doc_id, 40);
//! assert_eq!(parsed.words, vec!["new", "schizophrenia", "drug"]);
//!
//! assert!(DocumentParser::parse("Doc    breakthrough for schizophrenia").is_none());
//! ```

use crate::index::posting::DocId;

/// A document line split into its identifier and content words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Identifier parsed from the leading token.
    pub doc_id: DocId,

    /// Content words, in line order, with the identifier token removed.
    pub words: Vec<&'a str>,
}

/// Stateless parser for raw document lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParser;

impl DocumentParser {
    /// Parse a line into its identifier and words.
    ///
    /// Returns `None` when the line carries no identifier.
    pub fn parse(line: &str) -> Option<ParsedLine<'_>> {
        let doc_id = Self::parse_doc_id(line)?;
        let words = line.split_whitespace().skip(1).collect();
        Some(ParsedLine { doc_id, words })
    }

    /// Extract the document identifier from a line.
    ///
    /// Scanning stops at the first space. Returns `None` if no digit was seen,
    /// which keeps a missing identifier distinct from identifier `0`, and also
    /// when the digits do not fit in a [`DocId`].
    pub fn parse_doc_id(line: &str) -> Option<DocId> {
        let mut doc_id: Option<DocId> = None;

        for c in line.chars() {
            if c == ' ' {
                break;
            }
            if let Some(digit) = c.to_digit(10) {
                let current = doc_id.unwrap_or(0);
                match current
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(DocId::from(digit)))
                {
                    Some(next) => doc_id = Some(next),
                    None => {
                        log::debug!("Document identifier overflows in line '{line}'");
                        return None;
                    }
                }
            }
        }

        doc_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_identifier() {
        assert_eq!(DocumentParser::parse_doc_id("Doc1 breakthrough drug"), Some(1));
        assert_eq!(DocumentParser::parse_doc_id("Doc40    new drug"), Some(40));
    }

    #[test]
    fn test_parse_concatenates_scattered_digits() {
        assert_eq!(DocumentParser::parse_doc_id("D1o2c3 words"), Some(123));
    }

    #[test]
    fn test_digits_after_first_space_are_ignored() {
        assert_eq!(DocumentParser::parse_doc_id("Doc7 route 66"), Some(7));
        assert_eq!(DocumentParser::parse_doc_id("Doc route 66"), None);
    }

    #[test]
    fn test_zero_is_a_valid_identifier() {
        assert_eq!(DocumentParser::parse_doc_id("Doc0 zero"), Some(0));
        assert_eq!(DocumentParser::parse_doc_id("Doc zero"), None);
    }

    #[test]
    fn test_only_ascii_digits_form_identifiers() {
        // U+0663 ARABIC-INDIC DIGIT THREE, U+FF15 FULLWIDTH DIGIT FIVE
        assert_eq!(DocumentParser::parse_doc_id("Doc\u{663} x"), None);
        assert_eq!(DocumentParser::parse_doc_id("Doc1\u{663}2 x"), Some(12));
        assert_eq!(DocumentParser::parse_doc_id("Doc\u{ff15} x"), None);
        assert!(DocumentParser::parse("Doc\u{663} drug").is_none());
    }

    #[test]
    fn test_line_without_space() {
        assert_eq!(DocumentParser::parse_doc_id("Doc12"), Some(12));
        let parsed = DocumentParser::parse("Doc12").unwrap();
        assert!(parsed.words.is_empty());
    }

    #[test]
    fn test_overflow_is_not_an_identifier() {
        assert_eq!(
            DocumentParser::parse_doc_id("Doc99999999999999999999999 word"),
            None
        );
    }

    #[test]
    fn test_parse_splits_words_on_any_whitespace() {
        let parsed = DocumentParser::parse("Doc3 new\thopes  for\tschizophrenia").unwrap();
        assert_eq!(parsed.doc_id, 3);
        assert_eq!(parsed.words, vec!["new", "hopes", "for", "schizophrenia"]);
    }
}
