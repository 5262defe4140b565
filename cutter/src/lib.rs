//! Pattern cutter: turns a cut sheet and scanned pattern sheets into
//! density-normalised tiles, grid overlays, print pages and PDFs.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod driver;
pub mod output;
pub mod pdf;
pub mod pipeline;
pub mod report;

pub use bootstrap::init_foundation;
pub use cli::Cli;
pub use config::AppConfig;
pub use report::{BatchReport, LineOutcome};

#[cfg(test)]
mod tests;
