/// FileInspector CLI — command-line frontend.
///
/// This crate contains argument parsing and text rendering only. Business
/// logic lives in `fileinspector-core`.
pub mod app;
pub mod args;
pub mod progress;
pub mod report;

pub use app::run;
pub use args::Cli;
