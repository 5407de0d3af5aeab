use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::tables::{cell, tsv_reader};
use crate::dataset::RelevanceMap;
use crate::error::{ExplmapError, Result};

/// Load a prediction table.
///
/// Headerless TSV with two positional columns: question and predicted item,
/// one item per row, best-first in file order. Rows are grouped by the
/// lower-cased question in file order; repeated items within a group are
/// dropped, first occurrence wins.
///
/// A table with no rows, or with a column that is empty on every row, is a
/// fatal format error: that shape almost always means the file was written
/// with a different separator.
pub fn load_pred<R: Read>(input: R) -> Result<RelevanceMap> {
    let mut reader = tsv_reader(input, false);

    let mut rows: Vec<(Option<String>, Option<String>)> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push((
            cell(&record, 0).map(str::to_lowercase),
            cell(&record, 1).map(str::to_lowercase),
        ));
    }

    let questions_absent = rows.iter().all(|(question, _)| question.is_none());
    let items_absent = rows.iter().all(|(_, item)| item.is_none());
    if rows.is_empty() || questions_absent || items_absent {
        return Err(ExplmapError::Format(
            "invalid format of the prediction dataset, possibly the wrong separator".to_string(),
        ));
    }

    let mut pred = RelevanceMap::new();

    for (question, item) in rows {
        let (Some(question), Some(item)) = (question, item) else {
            continue;
        };
        let items = pred.entry(question).or_insert_with(Vec::new);
        if !items.contains(&item) {
            items.push(item);
        }
    }

    Ok(pred)
}

/// Load a prediction table from a file path.
pub fn load_pred_file<P: AsRef<Path>>(path: P) -> Result<RelevanceMap> {
    load_pred(File::open(path)?)
}
