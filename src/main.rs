//! FileInspector — folder analyser.
//!
//! Thin binary entry point. All logic lives in the `fileinspector-core`
//! and `fileinspector-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = fileinspector_cli::Cli::parse();

    // Initialise structured logging on stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    tracing::info!("FileInspector starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fileinspector_cli::run(&cli, &mut out)
}
