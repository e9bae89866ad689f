/// A single file observed during a scan.
///
/// Records are immutable once created: every field is private and only
/// exposed through accessors, so derived views (duplicates, junk lists,
/// exports) can borrow them without any risk of divergence from the scan.
use chrono::{DateTime, Local, NaiveDate};
use compact_str::CompactString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Why a filesystem entry produced no record.
///
/// Extraction never panics and never aborts a scan; the scanner filters
/// these out and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The entry disappeared between listing and stat, or is a dangling symlink.
    #[error("vanished before it could be read")]
    Vanished,

    /// The process may not stat the entry.
    #[error("permission denied")]
    PermissionDenied,

    /// The entry resolves to something other than a regular file
    /// (e.g. a symlink pointing at a directory).
    #[error("not a regular file")]
    NotAFile,

    /// Any other metadata failure.
    #[error(transparent)]
    Other(io::Error),
}

impl SkipReason {
    /// `true` when the entry was a file we failed to read, as opposed to an
    /// entry that was never a file in the first place.
    pub fn is_access_failure(&self) -> bool {
        !matches!(self, Self::NotAFile)
    }
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::Vanished,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other(err),
        }
    }
}

/// Name, extension, size, modification date and path of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: CompactString,
    extension: CompactString,
    size: u64,
    modified: NaiveDate,
    path: PathBuf,
}

impl FileRecord {
    /// Build a record from already-known values.
    ///
    /// `name` and `extension` are derived from `path`, matching what
    /// [`FileRecord::from_path`] would produce for the same file.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: NaiveDate) -> Self {
        let path = path.into();
        let name = base_name(&path);
        let extension = extension_of(&name);
        Self {
            name,
            extension,
            size,
            modified,
            path,
        }
    }

    /// Stat `path` (following symlinks) and build a record for it.
    ///
    /// A symlink to a file is recorded with the target's size and
    /// modification time, under the link's own path.
    pub fn from_path(path: &Path) -> Result<Self, SkipReason> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(SkipReason::NotAFile);
        }
        let modified = local_date(meta.modified()?);
        Ok(Self::new(path, meta.len(), modified))
    }

    /// File name only (NOT the full path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased suffix including the leading `.`, or `""`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Size in bytes at scan time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last-modified date in local time.
    pub fn modified(&self) -> NaiveDate {
        self.modified
    }

    /// Path as produced by the traversal.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Convert a filesystem timestamp to a local calendar date.
fn local_date(time: SystemTime) -> NaiveDate {
    DateTime::<Local>::from(time).date_naive()
}

fn base_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

/// Extract the lower-cased extension of a file name, dot included.
///
/// Leading dots are part of the stem, so `.bashrc` has no extension while
/// `archive.TAR.GZ` has `.gz`. A trailing dot yields `"."`.
pub fn extension_of(name: &str) -> CompactString {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(dot) => CompactString::new(name[stem_start + dot..].to_lowercase()),
        None => CompactString::default(),
    }
}
