//! Output formatting for CLI commands.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SchiltronArgs};
use crate::error::Result;
use crate::index::inverted::IndexStats;
use crate::index::posting::DocId;
use crate::search::result::SearchResults;

/// Results of one `search` invocation.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub results: Vec<SearchResults>,
    pub duration_ms: u64,
}

/// Posting list of one term.
#[derive(Debug, Serialize)]
pub struct TermPostings {
    pub term: String,
    pub found: bool,
    pub doc_ids: Vec<DocId>,
    pub documents: Vec<String>,
}

/// Results of an `index` invocation.
#[derive(Debug, Serialize)]
pub struct PostingsReport {
    pub terms: Vec<TermPostings>,
}

/// Results of a `stats` invocation.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub corpus: String,
    #[serde(flatten)]
    pub stats: IndexStats,
}

/// Types that know how to print themselves for a terminal.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for SearchResults {
    fn print_human(&self) {
        println!("Query: {}", self.query);
        match &self.diagnostic {
            Some(diagnostic) => println!("{diagnostic}"),
            None if self.hits.is_empty() => println!("No matching documents"),
            None => println!("{}", self.hits.join(", ")),
        }
    }
}

impl HumanReadable for SearchReport {
    fn print_human(&self) {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            result.print_human();
        }
    }
}

impl HumanReadable for PostingsReport {
    fn print_human(&self) {
        let width = self.terms.iter().map(|t| t.term.len()).max().unwrap_or(0);
        for entry in &self.terms {
            if entry.found {
                println!("{:<width$}  {}", entry.term, entry.documents.join(", "));
            } else {
                println!("{:<width$}  (not indexed)", entry.term);
            }
        }
    }
}

impl HumanReadable for StatsReport {
    fn print_human(&self) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Corpus: {}", self.corpus);
        println!("Documents indexed: {}", self.stats.doc_count);
        println!("Unique terms: {}", self.stats.term_count);
        println!("Total postings: {}", self.stats.total_postings);
        println!("Lines skipped: {}", self.stats.skipped_lines);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SchiltronArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &SchiltronArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SchiltronArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
///
/// The first array of objects found at the top level of the serialized value
/// becomes the rows. Any other object is written as key/value pairs.
fn output_csv<T: Serialize>(result: &T) -> Result<()> {
    let value = serde_json::to_value(result)?;
    for line in csv_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

fn csv_lines(value: &serde_json::Value) -> Vec<String> {
    let rows = match value {
        serde_json::Value::Array(_) => record_rows(value),
        serde_json::Value::Object(obj) => obj.values().find_map(record_rows),
        _ => None,
    };

    let mut lines = Vec::new();
    match (rows, value) {
        (Some(rows), _) => {
            // Rows may omit optional fields, so the header is the union of keys.
            let header: BTreeSet<&str> = rows
                .iter()
                .filter_map(|item| item.as_object())
                .flat_map(|obj| obj.keys().map(String::as_str))
                .collect();
            lines.push(header.iter().copied().collect::<Vec<_>>().join(","));

            for obj in rows.iter().filter_map(|item| item.as_object()) {
                let row: Vec<String> = header
                    .iter()
                    .map(|key| obj.get(*key).map(format_csv_value).unwrap_or_default())
                    .collect();
                lines.push(row.join(","));
            }
        }
        (None, serde_json::Value::Object(obj)) => {
            lines.push("key,value".to_string());
            for (key, value) in obj {
                lines.push(format!("{key},{}", format_csv_value(value)));
            }
        }
        (None, other) => {
            lines.push("value".to_string());
            lines.push(format_csv_value(other));
        }
    }
    lines
}

/// A non-empty array of objects, one CSV row per object.
fn record_rows(value: &serde_json::Value) -> Option<&Vec<serde_json::Value>> {
    value
        .as_array()
        .filter(|arr| !arr.is_empty() && arr.iter().all(serde_json::Value::is_object))
}

/// Format a value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    let raw = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    };

    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_csv_rows_from_nested_array() {
        let value = json!({
            "terms": [
                { "term": "drug", "doc_ids": [1, 4] },
                { "term": "new", "doc_ids": [2, 3, 4] }
            ]
        });

        assert_eq!(
            csv_lines(&value),
            vec!["doc_ids,term", "1 4,drug", "2 3 4,new"]
        );
    }

    #[test]
    fn test_csv_header_covers_optional_fields() {
        let value = json!([
            { "query": "a AND b", "hits": ["Doc1"] },
            { "query": "c", "hits": [], "diagnostic": "malformed" }
        ]);

        assert_eq!(
            csv_lines(&value),
            vec!["diagnostic,hits,query", ",Doc1,a AND b", "malformed,,c"]
        );
    }

    #[test]
    fn test_csv_key_value_object() {
        let value = json!({ "doc_count": 4, "corpus": "docs.txt" });
        let lines = csv_lines(&value);

        assert_eq!(lines[0], "key,value");
        assert!(lines.contains(&"doc_count,4".to_string()));
        assert!(lines.contains(&"corpus,docs.txt".to_string()));
    }

    #[test]
    fn test_csv_single_search_result_is_key_value() {
        let results = SearchResults {
            query: "schizophrenia AND drug".to_string(),
            hits: vec!["Doc1".to_string(), "Doc4".to_string()],
            doc_ids: vec![1, 4],
            diagnostic: None,
        };
        let lines = csv_lines(&serde_json::to_value(&results).unwrap());

        assert_eq!(lines[0], "key,value");
        assert!(lines.contains(&"hits,Doc1 Doc4".to_string()));
        assert!(lines.contains(&"doc_ids,1 4".to_string()));
        assert!(lines.contains(&"query,schizophrenia AND drug".to_string()));
    }

    #[test]
    fn test_csv_scalar_arrays_are_not_rows() {
        let value = json!({ "hits": [], "doc_ids": [2, 3] });

        assert_eq!(csv_lines(&value), vec!["key,value", "doc_ids,2 3", "hits,"]);
    }

    #[test]
    fn test_csv_value_quoting() {
        assert_eq!(format_csv_value(&json!("a,b")), "\"a,b\"");
        assert_eq!(format_csv_value(&json!("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(format_csv_value(&json!(null)), "");
    }
}
