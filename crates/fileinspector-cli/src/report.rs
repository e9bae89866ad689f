/// Plain-text rendering of the analysis views.
///
/// Every section writes to any `io::Write`, so the same code serves stdout
/// and the tests.
use fileinspector_core::analysis::{DeletionReport, DuplicateGroup, ExtensionCount, ExtensionSize};
use fileinspector_core::model::{format_count, format_size};
use fileinspector_core::{FileRecord, ScanResult};
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Width of the longest bar in the extension charts.
const BAR_WIDTH: usize = 30;

/// Render `builder` as a psql-style table: header, rule, then rows.
fn write_table(out: &mut impl Write, builder: Builder) -> io::Result<()> {
    let mut table = builder.build();
    table.with(Style::psql());
    writeln!(out, "{table}")
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn display_extension(ext: &str) -> &str {
    if ext.is_empty() {
        "(none)"
    } else {
        ext
    }
}

/// Bar of `value / max` scaled to [`BAR_WIDTH`]; non-zero values get at least one mark.
fn bar(value: u64, max: u64) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}

/// One-paragraph summary of the scan.
pub fn write_summary(out: &mut impl Write, result: &ScanResult) -> io::Result<()> {
    writeln!(
        out,
        "Found {} files ({}) in {}.",
        format_count(result.len() as u64),
        format_size(result.total_size()),
        result.root().display()
    )?;
    if result.skipped() > 0 {
        writeln!(
            out,
            "{} entries could not be read and were skipped.",
            format_count(result.skipped())
        )?;
    }
    if result.is_cancelled() {
        writeln!(out, "Scan was cancelled; results are partial.")?;
    }
    Ok(())
}

/// Name, extension, size and modification date of up to `max_rows` files.
pub fn write_overview(
    out: &mut impl Write,
    records: &[FileRecord],
    max_rows: usize,
) -> io::Result<()> {
    if max_rows == 0 {
        return Ok(());
    }
    heading(out, "File Overview")?;
    let mut builder = Builder::default();
    builder.push_record(["Name", "Extension", "Size", "Modified"]);
    for record in records.iter().take(max_rows) {
        builder.push_record([
            record.name().to_owned(),
            display_extension(record.extension()).to_owned(),
            format_size(record.size()),
            record.modified().format("%Y-%m-%d").to_string(),
        ]);
    }
    write_table(out, builder)?;
    if records.len() > max_rows {
        writeln!(out, "... and {} more", format_count((records.len() - max_rows) as u64))?;
    }
    Ok(())
}

/// Extension ranking by file count, with a bar per extension.
pub fn write_extension_counts(out: &mut impl Write, counts: &[ExtensionCount]) -> io::Result<()> {
    heading(out, "Top File Extensions")?;
    let max = counts.first().map_or(0, |c| c.count);
    let mut builder = Builder::default();
    builder.push_record(["Extension", "Count", ""]);
    for entry in counts {
        builder.push_record([
            display_extension(&entry.extension).to_owned(),
            format_count(entry.count),
            bar(entry.count, max),
        ]);
    }
    write_table(out, builder)
}

/// Extension ranking by total size, with a bar per extension.
pub fn write_extension_sizes(out: &mut impl Write, sizes: &[ExtensionSize]) -> io::Result<()> {
    heading(out, "Size by File Type")?;
    let max = sizes.first().map_or(0, |s| s.total_size);
    let mut builder = Builder::default();
    builder.push_record(["Extension", "Total Size", ""]);
    for entry in sizes {
        builder.push_record([
            display_extension(&entry.extension).to_owned(),
            format_size(entry.total_size),
            bar(entry.total_size, max),
        ]);
    }
    write_table(out, builder)
}

/// Duplicate files (by name + size), one row per file, grouped.
pub fn write_duplicates(out: &mut impl Write, groups: &[DuplicateGroup<'_>]) -> io::Result<()> {
    heading(out, "Duplicate Files (by Name + Size)")?;
    if groups.is_empty() {
        return writeln!(out, "No duplicates detected.");
    }

    let files: usize = groups.iter().map(|g| g.files.len()).sum();
    let wasted: u64 = groups.iter().map(DuplicateGroup::wasted_bytes).sum();
    writeln!(
        out,
        "Found {} duplicate files in {} groups ({} reclaimable).",
        format_count(files as u64),
        format_count(groups.len() as u64),
        format_size(wasted)
    )?;

    let mut builder = Builder::default();
    builder.push_record(["Name", "Size", "Path"]);
    for group in groups {
        for record in &group.files {
            builder.push_record([
                record.name().to_owned(),
                format_size(record.size()),
                record.path().display().to_string(),
            ]);
        }
    }
    write_table(out, builder)
}

/// Junk files with their extension and path.
pub fn write_junk(out: &mut impl Write, junk: &[&FileRecord]) -> io::Result<()> {
    heading(out, "Junk Files")?;
    if junk.is_empty() {
        return writeln!(out, "No junk files found.");
    }

    let total: u64 = junk.iter().map(|r| r.size()).sum();
    writeln!(
        out,
        "Found {} junk files ({}):",
        format_count(junk.len() as u64),
        format_size(total)
    )?;
    let mut builder = Builder::default();
    builder.push_record(["Name", "Extension", "Path"]);
    for record in junk {
        builder.push_record([
            record.name().to_owned(),
            record.extension().to_owned(),
            record.path().display().to_string(),
        ]);
    }
    write_table(out, builder)
}

/// Outcome of a junk cleanup.
pub fn write_deletion(out: &mut impl Write, report: &DeletionReport) -> io::Result<()> {
    writeln!(
        out,
        "Deleted {} of {} junk files ({} freed).",
        format_count(report.succeeded() as u64),
        format_count(report.attempted() as u64),
        format_size(report.bytes_freed())
    )?;
    for failure in report.failed() {
        writeln!(
            out,
            "  could not delete {}: {}",
            failure.path.display(),
            failure.message
        )?;
    }
    Ok(())
}
