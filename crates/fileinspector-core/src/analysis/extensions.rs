/// Extension statistics — how many files, and how many bytes, per extension.
///
/// Both rankings are descending by their metric and break ties by extension
/// in ascending byte order, so the output does not depend on the order of
/// the input records.
use crate::model::FileRecord;
use std::cmp::Reverse;
use std::collections::HashMap;

/// How many groups the frontends show by default.
pub const DEFAULT_TOP_N: usize = 10;

/// Number of files sharing one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCount {
    /// Lower-cased extension with its dot, `""` for files without one.
    pub extension: String,
    pub count: u64,
}

/// Total bytes of all files sharing one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSize {
    /// Lower-cased extension with its dot, `""` for files without one.
    pub extension: String,
    pub total_size: u64,
}

/// The `n` extensions with the most files.
pub fn top_extensions_by_count(records: &[FileRecord], n: usize) -> Vec<ExtensionCount> {
    top_n(records, n, |_| 1)
        .into_iter()
        .map(|(extension, count)| ExtensionCount { extension, count })
        .collect()
}

/// The `n` extensions with the largest combined size.
pub fn top_extensions_by_size(records: &[FileRecord], n: usize) -> Vec<ExtensionSize> {
    top_n(records, n, FileRecord::size)
        .into_iter()
        .map(|(extension, total_size)| ExtensionSize {
            extension,
            total_size,
        })
        .collect()
}

/// Sum `metric` per extension and keep the `n` largest sums.
fn top_n(
    records: &[FileRecord],
    n: usize,
    metric: impl Fn(&FileRecord) -> u64,
) -> Vec<(String, u64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *totals.entry(record.extension()).or_insert(0) += metric(record);
    }

    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_unstable_by_key(|&(ext, total)| (Reverse(total), ext));
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(ext, total)| (ext.to_owned(), total))
        .collect()
}
