/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the caller via a crossbeam channel.
use crate::error::CoreError;
use crate::model::ScanResult;
use std::time::Duration;

/// Running totals handed to the scan control callback between file visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Files recorded so far.
    pub files_found: u64,
    /// Entries dropped because they vanished or could not be read.
    pub skipped: u64,
}

/// Progress updates sent from the scan thread.
///
/// Every scan ends with exactly one of `Complete`, `Cancelled` or `Failed`.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        skipped: u64,
        current_path: String,
    },
    /// Scanning completed.
    Complete {
        result: ScanResult,
        duration: Duration,
    },
    /// Scan was cancelled; `partial` holds the records found before the stop.
    Cancelled { partial: ScanResult },
    /// The scan could not run (e.g. the root disappeared after validation).
    Failed(CoreError),
}

impl ScanProgress {
    /// `true` for the message that ends a scan.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Update { .. })
    }
}
