/// Duplicate file detection by name and size.
///
/// Two files are treated as duplicates when their base names and byte
/// sizes are equal. File contents are never read, so files that merely
/// share a name and size are reported too; that is an accepted limitation
/// of the heuristic.
///
/// Names are compared as raw OS strings, not as their lossy display form,
/// so two non-UTF-8 names that render alike are still told apart.
use crate::model::FileRecord;
use std::collections::HashMap;
use std::ffi::OsStr;

/// A group of files that are probably duplicates of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup<'a> {
    /// Shared base name.
    pub name: &'a str,
    /// Size of each file in the group.
    pub size: u64,
    /// All members, in traversal order. Always at least two.
    pub files: Vec<&'a FileRecord>,
}

impl DuplicateGroup<'_> {
    /// Bytes that would be reclaimed by keeping only one copy.
    pub fn wasted_bytes(&self) -> u64 {
        self.size * (self.files.len() as u64).saturating_sub(1)
    }
}

/// Every record that shares its `(name, size)` with at least one other
/// record, in traversal order.
///
/// All members of a group are returned, not just the extra copies.
pub fn find_duplicates(records: &[FileRecord]) -> Vec<&FileRecord> {
    let counts = key_counts(records);
    records
        .iter()
        .filter(|r| counts[&key(r)] > 1)
        .collect()
}

/// Duplicate records gathered into groups, ordered by each group's first
/// appearance in the traversal.
pub fn group_duplicates(records: &[FileRecord]) -> Vec<DuplicateGroup<'_>> {
    let mut slots: HashMap<(&OsStr, u64), usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup<'_>> = Vec::new();

    for record in records {
        let slot = *slots.entry(key(record)).or_insert_with(|| {
            groups.push(DuplicateGroup {
                name: record.name(),
                size: record.size(),
                files: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].files.push(record);
    }

    groups.retain(|g| g.files.len() > 1);
    groups
}

/// Total reclaimable bytes across all groups.
pub fn total_wasted(groups: &[DuplicateGroup<'_>]) -> u64 {
    groups.iter().map(DuplicateGroup::wasted_bytes).sum()
}

fn key(record: &FileRecord) -> (&OsStr, u64) {
    let path = record.path();
    (path.file_name().unwrap_or(path.as_os_str()), record.size())
}

fn key_counts(records: &[FileRecord]) -> HashMap<(&OsStr, u64), usize> {
    let mut counts = HashMap::with_capacity(records.len());
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}
