/// Analysis modules — read-only views computed from a scan's record table.
///
/// Only [`junk::delete_all`] touches the filesystem; everything else is a
/// pure function of the records it is given.
pub mod duplicates;
pub mod extensions;
pub mod junk;

pub use duplicates::{find_duplicates, group_duplicates, total_wasted, DuplicateGroup};
pub use extensions::{
    top_extensions_by_count, top_extensions_by_size, ExtensionCount, ExtensionSize, DEFAULT_TOP_N,
};
pub use junk::{classify_junk, delete_all, DeletionFailure, DeletionReport, JunkSet};
