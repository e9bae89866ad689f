/// End-to-end scanner integration tests.
///
/// These tests exercise the real `scan`, `scan_with` and `start_scan` entry
/// points against a real temporary filesystem, verifying that the scanner
/// records exactly the regular files below the root, tolerates entries it
/// cannot read, and reports through the progress channel.
use fileinspector_core::scanner::progress::ScanProgress;
use fileinspector_core::scanner::{scan, scan_with, start_scan, PROGRESS_CHANNEL_CAPACITY};
use fileinspector_core::{CoreError, FileRecord};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create a reproducible directory tree for scanner tests:
///
/// ```text
/// root/
///   alpha/
///     a.txt   (100 bytes)
///     b.rs    (200 bytes)
///   beta/
///     c.png   (300 bytes)
///     deep/
///       e.TMP (50 bytes)
///   empty/
///   d.zip     (400 bytes)
///   .hidden   (10 bytes)
/// ```
///
/// Total file bytes: 1 060.
fn build_test_tree(root: &Path) {
    let alpha = root.join("alpha");
    let deep = root.join("beta").join("deep");
    fs::create_dir_all(&alpha).unwrap();
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();

    write_bytes(&alpha.join("a.txt"), 100);
    write_bytes(&alpha.join("b.rs"), 200);
    write_bytes(&root.join("beta").join("c.png"), 300);
    write_bytes(&deep.join("e.TMP"), 50);
    write_bytes(&root.join("d.zip"), 400);
    write_bytes(&root.join(".hidden"), 10);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

fn paths(records: &[FileRecord]) -> BTreeSet<PathBuf> {
    records.iter().map(|r| r.path().to_path_buf()).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The scanner must record every regular file exactly once and no directories.
#[test]
fn scan_discovers_all_files() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let result = scan(tmp.path()).expect("scan failed");

    let expected: BTreeSet<PathBuf> = [
        "alpha/a.txt",
        "alpha/b.rs",
        "beta/c.png",
        "beta/deep/e.TMP",
        "d.zip",
        ".hidden",
    ]
    .iter()
    .map(|rel| tmp.path().join(rel))
    .collect();

    assert_eq!(result.len(), 6, "one record per file");
    assert_eq!(paths(result.records()), expected);
    assert_eq!(result.total_size(), 1_060);
    assert_eq!(result.skipped(), 0);
    assert!(!result.is_cancelled());
    assert_eq!(result.root(), tmp.path());
}

/// Record fields must reflect the file on disk.
#[test]
fn scan_fills_record_fields() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let result = scan(tmp.path()).unwrap();
    let tmp_file = result
        .iter()
        .find(|r| r.name() == "e.TMP")
        .expect("e.TMP missing");

    assert_eq!(tmp_file.extension(), ".tmp");
    assert_eq!(tmp_file.size(), 50);
    assert_eq!(tmp_file.path(), tmp.path().join("beta/deep/e.TMP"));

    let hidden = result.iter().find(|r| r.name() == ".hidden").unwrap();
    assert_eq!(hidden.extension(), "", "dotfiles have no extension");
}

/// Two scans of an unchanged tree visit files in the same order.
#[test]
fn scan_order_is_stable() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let first = scan(tmp.path()).unwrap();
    let second = scan(tmp.path()).unwrap();
    assert_eq!(first.records(), second.records());
}

/// Scans of an empty directory must succeed with no records.
#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");

    let result = scan(tmp.path()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total_size(), 0);
}

/// A missing root is reported before any traversal.
#[test]
fn scan_missing_root_is_an_error() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let missing = tmp.path().join("nope");

    let err = scan(&missing).unwrap_err();
    assert!(matches!(err, CoreError::RootNotFound(ref p) if p == &missing));
}

/// A file given as root is reported before any traversal.
#[test]
fn scan_file_root_is_an_error() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 1);

    let err = scan(&file).unwrap_err();
    assert!(matches!(err, CoreError::RootNotADirectory(_)));
    assert!(err.is_invalid_root());
}

/// A dangling symlink cannot be stat'ed and must be skipped, not recorded.
#[cfg(unix)]
#[test]
fn scan_skips_dangling_symlink() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("real.txt"), 20);
    std::os::unix::fs::symlink(tmp.path().join("missing.txt"), tmp.path().join("dangling.txt"))
        .unwrap();

    let result = scan(tmp.path()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.records()[0].name(), "real.txt");
    assert_eq!(result.skipped(), 1);
}

/// A symlink to a file is recorded with the target's size under its own path.
#[cfg(unix)]
#[test]
fn scan_records_symlinked_file() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("target.bin"), 64);
    std::os::unix::fs::symlink(tmp.path().join("target.bin"), tmp.path().join("link.bin")).unwrap();

    let result = scan(tmp.path()).unwrap();
    assert_eq!(result.len(), 2);
    let link = result.iter().find(|r| r.name() == "link.bin").unwrap();
    assert_eq!(link.size(), 64);
}

/// Symlinked directories are not descended into, so a loop terminates.
#[cfg(unix)]
#[test]
fn scan_does_not_follow_directory_symlinks() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("only.txt"), 5);
    // sub/loop -> root: following it would recurse forever.
    std::os::unix::fs::symlink(tmp.path(), sub.join("loop")).unwrap();

    let result = scan(tmp.path()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.records()[0].name(), "only.txt");
    assert_eq!(result.skipped(), 0, "a directory link is not an access failure");
}

/// The control callback can stop the scan; the partial result is flagged.
#[test]
fn scan_with_cancellation_returns_partial_result() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for i in 0..20 {
        write_bytes(&tmp.path().join(format!("file{i:02}.bin")), 8);
    }

    let result = scan_with(tmp.path(), |_, counters| {
        if counters.files_found >= 5 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();

    assert!(result.is_cancelled());
    assert_eq!(result.len(), 5);
}

/// The background scan must deliver the full result through the channel.
#[test]
fn start_scan_completes_with_result() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let handle = start_scan(tmp.path().to_path_buf()).unwrap();
    match handle.wait() {
        Some(ScanProgress::Complete { result, .. }) => {
            assert_eq!(result.len(), 6);
            assert_eq!(result.total_size(), 1_060);
        }
        other => panic!("expected Complete, got {other:?}"),
    }
}

/// Progress messages must include Update messages once enough files are seen.
#[test]
fn start_scan_sends_progress_updates() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    // More than PROGRESS_INTERVAL files, so at least one Update fires.
    for i in 0..600 {
        write_bytes(&tmp.path().join(format!("f{i:04}.dat")), 1);
    }

    let handle = start_scan(tmp.path().to_path_buf()).unwrap();
    let messages: Vec<ScanProgress> = handle.progress_rx.iter().collect();

    assert!(messages
        .iter()
        .any(|m| matches!(m, ScanProgress::Update { files_found, .. } if *files_found >= 500)));
    assert!(matches!(
        messages.last(),
        Some(ScanProgress::Complete { result, .. }) if result.len() == 600
    ));
    assert_eq!(messages.iter().filter(|m| m.is_terminal()).count(), 1);
}

/// Cancellation must stop the scan gracefully with a terminal message.
#[test]
fn start_scan_cancellation_sends_terminal_message() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let handle = start_scan(tmp.path().to_path_buf()).unwrap();
    // The scanner may already be done by the time the flag is read, so we
    // accept either Cancelled or Complete.
    handle.cancel();
    assert!(handle.is_cancelled());

    match handle.wait() {
        Some(ScanProgress::Cancelled { partial }) => assert!(partial.is_cancelled()),
        Some(ScanProgress::Complete { .. }) => {}
        other => panic!("expected a terminal message, got {other:?}"),
    }
}

/// An invalid root is rejected on the calling thread.
#[test]
fn start_scan_rejects_missing_root() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let result = start_scan(tmp.path().join("absent"));
    assert!(matches!(result, Err(CoreError::RootNotFound(_))));
}

/// `PROGRESS_CHANNEL_CAPACITY` must be a positive constant so it is never
/// accidentally set to 0 (which would make every `send()` block immediately).
const _: () = assert!(
    PROGRESS_CHANNEL_CAPACITY > 0,
    "PROGRESS_CHANNEL_CAPACITY must be > 0"
);
