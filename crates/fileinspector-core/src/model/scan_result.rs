/// The record table produced by one scan.
///
/// Records are kept in traversal order. The table is read-only once built;
/// analysis functions borrow from it and never modify it.
use super::record::FileRecord;
use std::path::{Path, PathBuf};

/// Everything one scan observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    root: PathBuf,
    records: Vec<FileRecord>,
    skipped: u64,
    cancelled: bool,
}

impl ScanResult {
    /// Wrap an already-collected record table, e.g. for analysis of
    /// records that did not come from a live scan.
    pub fn from_records(root: impl Into<PathBuf>, records: Vec<FileRecord>) -> Self {
        Self {
            root: root.into(),
            records,
            skipped: 0,
            cancelled: false,
        }
    }

    pub(crate) fn new(
        root: PathBuf,
        records: Vec<FileRecord>,
        skipped: u64,
        cancelled: bool,
    ) -> Self {
        Self {
            root,
            records,
            skipped,
            cancelled,
        }
    }

    /// The directory that was scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All records, in traversal order.
    #[inline]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Iterate over the records in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the scan found no readable files.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every record's size.
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(FileRecord::size).sum()
    }

    /// Entries dropped because they vanished or could not be read.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// `true` if the caller stopped the scan early; the records are then a
    /// prefix of what a full scan would have produced.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
