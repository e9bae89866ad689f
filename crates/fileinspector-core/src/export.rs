/// CSV and JSON export of record tables.
///
/// Rows use the same shape the report frontends display:
/// `name, extension, sizeBytes, sizeFormatted, modifiedDate, path`.
use crate::error::CoreResult;
use crate::model::{format_size, FileRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

/// One exported record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub name: String,
    pub extension: String,
    pub size_bytes: u64,
    pub size_formatted: String,
    pub modified_date: NaiveDate,
    pub path: String,
}

impl From<&FileRecord> for RecordRow {
    fn from(record: &FileRecord) -> Self {
        Self {
            name: record.name().to_owned(),
            extension: record.extension().to_owned(),
            size_bytes: record.size(),
            size_formatted: format_size(record.size()),
            modified_date: record.modified(),
            path: record.path().to_string_lossy().into_owned(),
        }
    }
}

/// Write `records` as CSV with a header row.
pub fn write_csv<'a, I, W>(records: I, writer: W) -> CoreResult<()>
where
    I: IntoIterator<Item = &'a FileRecord>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(RecordRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `records` as a pretty-printed JSON array.
pub fn write_json<'a, I, W>(records: I, writer: W) -> CoreResult<()>
where
    I: IntoIterator<Item = &'a FileRecord>,
    W: Write,
{
    let rows: Vec<RecordRow> = records.into_iter().map(RecordRow::from).collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}
