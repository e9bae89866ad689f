/// FileInspector Core — scanning, analysis, and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Immutable file records, the scan result table, size formatting.
/// - [`scanner`] — Blocking directory walk, plus a background wrapper with progress reporting.
/// - [`analysis`] — Post-scan views: extension statistics, duplicates, junk cleanup.
/// - [`export`] — CSV / JSON output of record tables.
/// - [`error`] — Error type shared by the fallible entry points.
pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod scanner;

pub use error::{CoreError, CoreResult};
pub use model::{FileRecord, ScanResult};
