/// Data model for FileInspector.
///
/// Re-exports the per-file record, the scan result table and the size
/// formatting helpers.
pub mod record;
pub mod scan_result;
pub mod size;

pub use record::{FileRecord, SkipReason};
pub use scan_result::ScanResult;
pub use size::{format_count, format_size};
