use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::tables::{cell, column_index, tsv_reader};
use crate::dataset::RelevanceMap;
use crate::error::Result;

/// Row flags accepted into the gold mapping; rows carrying anything else
/// are excluded before any further processing.
const ACCEPTED_FLAGS: [&str; 2] = ["success", "ready"];

/// Load the gold relevance table.
///
/// Expects a headered TSV with at least `QuestionID`, `explanation` and
/// `flags` columns. The explanation cell is a whitespace-separated list of
/// `itemID|role` tokens; the role annotation is discarded. Identifiers are
/// lower-cased here so gold and prediction sources need not agree on case.
///
/// Rows are dropped when the flag is not `success`/`ready`, when a required
/// cell is missing, or when the explanation cell yields no tokens. A
/// question appearing on several surviving rows keeps the last row's items.
pub fn load_gold<R: Read>(input: R) -> Result<RelevanceMap> {
    let mut reader = tsv_reader(input, true);
    let headers = reader.headers()?.clone();

    let question_col = column_index(&headers, "QuestionID")?;
    let explanation_col = column_index(&headers, "explanation")?;
    let flags_col = column_index(&headers, "flags")?;

    let mut gold = RelevanceMap::new();

    for record in reader.records() {
        let record = record?;

        let accepted = cell(&record, flags_col)
            .map(|flag| ACCEPTED_FLAGS.contains(&flag.to_lowercase().as_str()))
            .unwrap_or(false);
        if !accepted {
            continue;
        }

        let (Some(question), Some(explanation)) =
            (cell(&record, question_col), cell(&record, explanation_col))
        else {
            log::debug!("dropping gold row with missing QuestionID or explanation");
            continue;
        };

        let question = question.to_lowercase();
        let items: Vec<String> = explanation
            .to_lowercase()
            .split_whitespace()
            .map(|token| token.split_once('|').map_or(token, |(uid, _)| uid).to_string())
            .collect();

        // Never insert an empty item list; it would score as a trivially
        // perfect question downstream.
        if items.is_empty() {
            log::debug!("dropping gold row for {question}: explanation has no tokens");
            continue;
        }

        gold.insert(question, items);
    }

    if gold.is_empty() {
        log::warn!("gold table produced no usable rows after filtering");
    }

    Ok(gold)
}

/// Load the gold relevance table from a file path.
pub fn load_gold_file<P: AsRef<Path>>(path: P) -> Result<RelevanceMap> {
    load_gold(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExplmapError;
    use std::io::Cursor;

    fn load(data: &str) -> RelevanceMap {
        load_gold(Cursor::new(data)).unwrap()
    }

    #[test]
    fn test_load_gold_strips_roles_and_lowercases() {
        let gold = load(
            "QuestionID\texplanation\tflags\n\
             Q1\tE1|CENTRAL E2|LEXGLUE\tSUCCESS\n",
        );
        assert_eq!(gold.len(), 1);
        assert_eq!(gold["q1"], vec!["e1", "e2"]);
    }

    #[test]
    fn test_load_gold_token_without_role_kept_whole() {
        let gold = load(
            "QuestionID\texplanation\tflags\n\
             q1\te1 e2|ROLE\tready\n",
        );
        assert_eq!(gold["q1"], vec!["e1", "e2"]);
    }

    #[test]
    fn test_load_gold_filters_flags() {
        let gold = load(
            "QuestionID\texplanation\tflags\n\
             q1\te1|R\tsuccess\n\
             q2\te2|R\tready\n\
             q3\te3|R\trejected\n\
             q4\te4|R\t\n",
        );
        assert_eq!(gold.len(), 2);
        assert!(gold.contains_key("q1"));
        assert!(gold.contains_key("q2"));
        assert!(!gold.contains_key("q3"));
        assert!(!gold.contains_key("q4"));
    }

    #[test]
    fn test_load_gold_drops_rows_with_missing_fields() {
        let gold = load(
            "QuestionID\texplanation\tflags\n\
             \te1|R\tsuccess\n\
             q2\t\tsuccess\n\
             q3\te3|R\tsuccess\n",
        );
        assert_eq!(gold.len(), 1);
        assert_eq!(gold["q3"], vec!["e3"]);
    }

    #[test]
    fn test_load_gold_duplicate_question_last_row_wins() {
        let gold = load(
            "QuestionID\texplanation\tflags\n\
             q1\te1|R\tsuccess\n\
             q2\te9|R\tsuccess\n\
             Q1\te2|R e3|R\tready\n",
        );
        assert_eq!(gold["q1"], vec!["e2", "e3"]);
        // The first occurrence's position in iteration order is retained.
        let order: Vec<&str> = gold.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["q1", "q2"]);
    }

    #[test]
    fn test_load_gold_missing_column_is_fatal() {
        let err = load_gold(Cursor::new("QuestionID\texplanation\nq1\te1|R\n")).unwrap_err();
        assert!(matches!(err, ExplmapError::MissingColumn(name) if name == "flags"));
    }

    #[test]
    fn test_load_gold_header_only_is_empty_not_fatal() {
        let gold = load("QuestionID\texplanation\tflags\n");
        assert!(gold.is_empty());
    }
}
