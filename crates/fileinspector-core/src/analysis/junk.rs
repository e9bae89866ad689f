/// Junk file classification and cleanup.
///
/// Classification is a pure filter over the record table. Deletion is a
/// separate, explicit command: callers first obtain the junk list, show it,
/// then hand it to [`delete_all`].
use crate::model::FileRecord;
use compact_str::CompactString;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// Extensions treated as junk when no other set is configured.
pub const DEFAULT_JUNK_EXTENSIONS: [&str; 3] = [".tmp", ".log", ".bak"];

/// A set of extensions designated as disposable.
///
/// Entries are normalised the same way record extensions are: lower-cased
/// with a leading dot, so `"TMP"`, `"tmp"` and `".tmp"` are the same entry.
/// An empty entry matches files without an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkSet {
    extensions: BTreeSet<CompactString>,
}

impl JunkSet {
    /// Build a junk set from any list of extension strings.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| normalise(ext.as_ref()))
                .collect(),
        }
    }

    /// `true` if `extension` (as stored on a [`FileRecord`]) is junk.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// The normalised extensions, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for JunkSet {
    fn default() -> Self {
        Self::new(DEFAULT_JUNK_EXTENSIONS)
    }
}

fn normalise(ext: &str) -> CompactString {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        CompactString::new(ext)
    } else {
        CompactString::new(format!(".{ext}"))
    }
}

/// Every record whose extension is in `junk`, in traversal order.
pub fn classify_junk<'a>(records: &'a [FileRecord], junk: &JunkSet) -> Vec<&'a FileRecord> {
    records
        .iter()
        .filter(|r| junk.contains(r.extension()))
        .collect()
}

/// One file that could not be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

/// Outcome of a [`delete_all`] batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    deleted: Vec<PathBuf>,
    failed: Vec<DeletionFailure>,
    bytes_freed: u64,
}

impl DeletionReport {
    /// Number of files a deletion was attempted for.
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// Number of files actually removed.
    pub fn succeeded(&self) -> usize {
        self.deleted.len()
    }

    /// Paths removed, in request order.
    pub fn deleted(&self) -> &[PathBuf] {
        &self.deleted
    }

    /// Files that could not be removed, in request order.
    pub fn failed(&self) -> &[DeletionFailure] {
        &self.failed
    }

    /// Sum of the scanned sizes of the removed files.
    pub fn bytes_freed(&self) -> u64 {
        self.bytes_freed
    }

    /// `true` if every attempted deletion succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete the file behind every record, best effort.
///
/// Each deletion is independent: a file that is already gone, locked or
/// protected is recorded as a failure and the batch carries on. Nothing
/// here returns an error. The records themselves are untouched; re-scan to
/// see the new state of the tree.
pub fn delete_all<'a, I>(records: I) -> DeletionReport
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let mut report = DeletionReport::default();

    for record in records {
        let path = record.path();
        match fs::remove_file(path) {
            Ok(()) => {
                report.bytes_freed += record.size();
                report.deleted.push(path.to_path_buf());
            }
            Err(err) => {
                warn!("Could not delete {}: {err}", path.display());
                report.failed.push(DeletionFailure {
                    path: path.to_path_buf(),
                    kind: err.kind(),
                    message: err.to_string(),
                });
            }
        }
    }

    info!(
        "Deleted {} of {} files ({} bytes)",
        report.succeeded(),
        report.attempted(),
        report.bytes_freed
    );
    report
}
