/// Scanner module — walks a directory tree into a [`ScanResult`].
///
/// The scan itself is a single blocking call on the caller's thread:
/// - [`scan`] runs to completion.
/// - [`scan_with`] accepts a control callback, invoked between file visits,
///   that can report progress or stop the walk.
///
/// [`start_scan`] is a convenience wrapper that runs [`scan_with`] on a
/// background thread and reports over a bounded crossbeam channel, for
/// frontends that want a progress display and a cancel button.
pub mod progress;
pub(crate) mod walk;

use crate::error::{CoreError, CoreResult};
use crate::model::{FileRecord, ScanResult};
use progress::{ScanCounters, ScanProgress};

use crossbeam_channel::{Receiver, Sender};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of progress messages that may queue up in the channel.
///
/// If the consumer falls behind, the scanner stalls briefly on `send`
/// rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Number of files between two `ScanProgress::Update` messages.
pub const PROGRESS_INTERVAL: u64 = 500;

/// Check that `root` exists and is a directory.
///
/// Called by every scan entry point before any traversal starts.
pub fn validate_root(root: &Path) -> CoreResult<PathBuf> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(root.to_path_buf()),
        Ok(_) => Err(CoreError::RootNotADirectory(root.to_path_buf())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(CoreError::RootNotFound(root.to_path_buf()))
        }
        Err(err) => Err(CoreError::Io(err)),
    }
}

/// Scan every file below `root`, blocking until the walk is done.
pub fn scan(root: impl AsRef<Path>) -> CoreResult<ScanResult> {
    scan_with(root, |_, _| ControlFlow::Continue(()))
}

/// Scan every file below `root`, calling `control` before each file visit.
///
/// Returning `ControlFlow::Break` from `control` stops the walk; the
/// records gathered so far come back with [`ScanResult::is_cancelled`] set.
pub fn scan_with<C>(root: impl AsRef<Path>, control: C) -> CoreResult<ScanResult>
where
    C: FnMut(&Path, &ScanCounters) -> ControlFlow<()>,
{
    let root = validate_root(root.as_ref())?;
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let collected = walk::collect_records(walk::walk(&root), FileRecord::from_path, control);

    info!(
        "Scan of {} {}: {} files, {} skipped in {:?}",
        root.display(),
        if collected.cancelled { "cancelled" } else { "complete" },
        collected.records.len(),
        collected.skipped,
        start.elapsed()
    );

    Ok(ScanResult::new(
        root,
        collected.records,
        collected.skipped,
        collected.cancelled,
    ))
}

/// Handle to a running or completed background scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: thread::JoinHandle<()>,
}

impl ScanHandle {
    /// Request the scan to stop before the next file visit.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Block until the terminal message arrives, discarding updates.
    ///
    /// Returns `None` if the scan thread went away without reporting.
    pub fn wait(self) -> Option<ScanProgress> {
        self.progress_rx.iter().find(ScanProgress::is_terminal)
    }
}

/// Control callback of a background scan.
///
/// Stops the walk once cancellation is requested or once the receiving
/// [`ScanHandle`] has been dropped, and sends an update every
/// [`PROGRESS_INTERVAL`] files otherwise.
struct ProgressRelay {
    tx: Sender<ScanProgress>,
    cancel_flag: Arc<AtomicBool>,
    last_reported: u64,
}

impl ProgressRelay {
    fn new(tx: Sender<ScanProgress>, cancel_flag: Arc<AtomicBool>) -> Self {
        Self {
            tx,
            cancel_flag,
            last_reported: 0,
        }
    }

    fn on_visit(&mut self, path: &Path, counters: &ScanCounters) -> ControlFlow<()> {
        if self.cancel_flag.load(Ordering::Relaxed) {
            return ControlFlow::Break(());
        }
        if counters.files_found < self.last_reported + PROGRESS_INTERVAL {
            return ControlFlow::Continue(());
        }
        self.last_reported = counters.files_found;
        let update = ScanProgress::Update {
            files_found: counters.files_found,
            skipped: counters.skipped,
            current_path: path.to_string_lossy().into_owned(),
        };
        if self.tx.send(update).is_err() {
            debug!("Progress receiver dropped, stopping scan");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Start a new scan on a background thread.
///
/// The root is validated on the calling thread, so an invalid path is
/// reported here rather than through the channel.
pub fn start_scan(root_path: PathBuf) -> CoreResult<ScanHandle> {
    let root_path = validate_root(&root_path)?;

    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("fileinspector-scanner".into())
        .spawn(move || {
            let start = Instant::now();
            let mut relay = ProgressRelay::new(progress_tx.clone(), cancel_clone);
            let outcome = scan_with(&root_path, |path, counters| relay.on_visit(path, counters));

            let terminal = match outcome {
                Ok(result) if result.is_cancelled() => {
                    ScanProgress::Cancelled { partial: result }
                }
                Ok(result) => ScanProgress::Complete {
                    result,
                    duration: start.elapsed(),
                },
                Err(err) => ScanProgress::Failed(err),
            };
            let _ = progress_tx.send(terminal);
        })?;

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: thread,
    })
}
