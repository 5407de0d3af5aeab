use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::Read;

use crate::error::{ExplmapError, Result};

/// Build a tab-separated reader over arbitrary input.
///
/// `flexible` keeps ragged rows readable; loaders decide per row whether a
/// missing cell disqualifies the row.
pub fn tsv_reader<R: Read>(input: R, has_headers: bool) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(input)
}

/// Locate a required column by exact header name.
pub fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ExplmapError::MissingColumn(name.to_string()))
}

/// A cell that exists and is non-empty, or `None`.
pub fn cell<'r>(record: &'r StringRecord, index: usize) -> Option<&'r str> {
    record.get(index).filter(|value| !value.is_empty())
}
