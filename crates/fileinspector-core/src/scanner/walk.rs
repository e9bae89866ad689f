/// Directory walker using `jwalk` in serial mode.
///
/// The walk runs on the calling thread with directory entries sorted by
/// name, so two scans of an unchanged tree visit files in the same order.
/// Symlinks are never followed: a symlinked directory shows up as a single
/// non-directory entry and is never descended into, which rules out cycles.
use crate::model::{FileRecord, SkipReason};
use crate::scanner::progress::ScanCounters;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One step of the walk: a candidate file path, or a directory we could not read.
pub(crate) enum WalkItem {
    Candidate(PathBuf),
    Unreadable(jwalk::Error),
}

/// Every non-directory entry below `root`, in traversal order.
pub(crate) fn walk(root: &Path) -> impl Iterator<Item = WalkItem> {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(WalkItem::Candidate(entry.path())),
            Err(err) => Some(WalkItem::Unreadable(err)),
        })
}

/// What the collector ended with.
pub(crate) struct Collected {
    pub records: Vec<FileRecord>,
    pub skipped: u64,
    pub cancelled: bool,
}

/// Turn walk items into records.
///
/// `extract` is the per-file step (normally [`FileRecord::from_path`]);
/// `control` runs before every file visit and may stop the walk. Access
/// failures are dropped and counted; entries that are not files at all are
/// dropped silently.
pub(crate) fn collect_records<I, X, C>(items: I, mut extract: X, mut control: C) -> Collected
where
    I: IntoIterator<Item = WalkItem>,
    X: FnMut(&Path) -> Result<FileRecord, SkipReason>,
    C: FnMut(&Path, &ScanCounters) -> ControlFlow<()>,
{
    let mut records = Vec::new();
    let mut counters = ScanCounters::default();

    for item in items {
        let path = match item {
            WalkItem::Candidate(path) => path,
            WalkItem::Unreadable(err) => {
                counters.skipped += 1;
                debug!("Skipping unreadable directory entry: {err}");
                continue;
            }
        };

        if control(&path, &counters).is_break() {
            return Collected {
                records,
                skipped: counters.skipped,
                cancelled: true,
            };
        }

        match extract(&path) {
            Ok(record) => {
                counters.files_found += 1;
                records.push(record);
            }
            Err(reason) if reason.is_access_failure() => {
                counters.skipped += 1;
                debug!("Skipping {}: {reason}", path.display());
            }
            Err(_) => {}
        }
    }

    Collected {
        records,
        skipped: counters.skipped,
        cancelled: false,
    }
}
