/// The `fileinspector` command flow: scan, render every view, then run the
/// explicit cleanup and export steps the user asked for.
use crate::args::Cli;
use crate::progress::ScanSpinner;
use crate::report;
use anyhow::{anyhow, Context};
use fileinspector_core::analysis::{
    classify_junk, delete_all, group_duplicates, top_extensions_by_count, top_extensions_by_size,
};
use fileinspector_core::export::{write_csv, write_json};
use fileinspector_core::scanner::progress::ScanProgress;
use fileinspector_core::scanner::{start_scan, ScanHandle};
use fileinspector_core::ScanResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

/// Run one inspection and write the report to `out`.
///
/// Progress is shown on stderr while the scan runs.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let handle = start_scan(cli.path.clone())
        .with_context(|| format!("cannot inspect {}", cli.path.display()))?;
    let result = wait_for_result(handle)?;

    report::write_summary(out, &result)?;
    report::write_overview(out, result.records(), cli.rows)?;
    report::write_extension_counts(out, &top_extensions_by_count(result.records(), cli.top))?;
    report::write_extension_sizes(out, &top_extensions_by_size(result.records(), cli.top))?;
    report::write_duplicates(out, &group_duplicates(result.records()))?;

    let junk = classify_junk(result.records(), &cli.junk_set());
    report::write_junk(out, &junk)?;
    if cli.delete_junk && !junk.is_empty() {
        info!("Deleting {} junk files", junk.len());
        let deletion = delete_all(junk.iter().copied());
        report::write_deletion(out, &deletion)?;
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        write_csv(&result, BufWriter::new(file))?;
        writeln!(out, "Wrote CSV export to {}", path.display())?;
    }
    if let Some(path) = &cli.json {
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_json(&result, &mut writer)?;
        writer.flush()?;
        writeln!(out, "Wrote JSON export to {}", path.display())?;
    }

    Ok(())
}

/// Drain the progress channel, showing updates on a spinner, until the scan ends.
fn wait_for_result(handle: ScanHandle) -> anyhow::Result<ScanResult> {
    let spinner = ScanSpinner::new();
    for message in handle.progress_rx.iter() {
        let result = match message {
            ScanProgress::Update {
                files_found,
                skipped,
                current_path,
            } => {
                spinner.update(files_found, skipped, &current_path);
                continue;
            }
            ScanProgress::Complete { result, duration } => {
                info!("Scan finished in {duration:?}");
                Ok(result)
            }
            ScanProgress::Cancelled { partial } => Ok(partial),
            ScanProgress::Failed(err) => Err(err.into()),
        };
        spinner.finish();
        return result;
    }
    spinner.finish();
    Err(anyhow!("scanner stopped without reporting a result"))
}
