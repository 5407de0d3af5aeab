use std::fs::File;
use std::io::Read;
use std::path::Path;

use walkdir::WalkDir;

use crate::dataset::tables::{cell, column_index, tsv_reader};
use crate::error::Result;

/// One candidate explanation sentence from a source table.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub uid: String,
    pub text: String,
}

/// One question to rank explanations for.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// Read one explanation table.
///
/// The UID column is the first header containing both `[SKIP]` and `UID`;
/// every header not starting with `[SKIP]` is a text column. Each row joins
/// its non-empty text cells into the explanation text. A file without a UID
/// column, or without any usable row, is reported with a warning and yields
/// nothing, so one stray file cannot abort corpus aggregation.
pub fn read_explanations(path: &Path) -> Result<Vec<Explanation>> {
    let mut reader = tsv_reader(File::open(path)?, true);
    let headers = reader.headers()?.clone();

    let mut uid_col = None;
    let mut text_cols = Vec::new();

    for (index, name) in headers.iter().enumerate() {
        if name.starts_with("[SKIP]") {
            if name.contains("UID") && uid_col.is_none() {
                uid_col = Some(index);
            }
        } else {
            text_cols.push(index);
        }
    }

    let Some(uid_col) = uid_col else {
        log::warn!("possibly misformatted file: {}", path.display());
        return Ok(Vec::new());
    };

    let mut explanations = Vec::new();

    for record in reader.records() {
        let record = record?;
        let Some(uid) = cell(&record, uid_col) else {
            continue;
        };
        let text = text_cols
            .iter()
            .filter_map(|&index| cell(&record, index))
            .collect::<Vec<_>>()
            .join(" ");
        explanations.push(Explanation {
            uid: uid.to_string(),
            text,
        });
    }

    if explanations.is_empty() {
        log::warn!("possibly misformatted file: {}", path.display());
    }

    Ok(explanations)
}

/// Aggregate explanations from every file under `dir`, recursively.
pub fn collect_explanations(dir: &Path) -> Result<Vec<Explanation>> {
    let mut explanations = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        explanations.extend(read_explanations(entry.path())?);
    }

    if explanations.is_empty() {
        log::warn!("no explanations found under {}", dir.display());
    } else {
        log::info!(
            "collected {} explanations from {}",
            explanations.len(),
            dir.display()
        );
    }

    Ok(explanations)
}

/// Load the question table: headered TSV with `QuestionID` and `question`
/// columns located by name. Rows with an empty cell are skipped.
pub fn load_questions<R: Read>(input: R) -> Result<Vec<Question>> {
    let mut reader = tsv_reader(input, true);
    let headers = reader.headers()?.clone();

    let id_col = column_index(&headers, "QuestionID")?;
    let text_col = column_index(&headers, "question")?;

    let mut questions = Vec::new();

    for record in reader.records() {
        let record = record?;
        let (Some(id), Some(text)) = (cell(&record, id_col), cell(&record, text_col)) else {
            continue;
        };
        questions.push(Question {
            id: id.to_string(),
            text: text.to_string(),
        });
    }

    Ok(questions)
}

/// Load the question table from a file path.
pub fn load_questions_file<P: AsRef<Path>>(path: P) -> Result<Vec<Question>> {
    load_questions(File::open(path)?)
}
