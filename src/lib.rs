pub mod config;
pub mod dispatch;
pub mod ingestion;
pub mod models;
pub mod ocr;
pub mod report;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;


pub use config::Config;
pub use ingestion::indexing_run::{IndexingRunService, RunSummary};
