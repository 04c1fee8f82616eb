//! Factory for creating the indexing collaborator based on configuration

use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use super::script::ScriptDispatcher;
use super::IndexingCollaborator;
use crate::config::Config;

/// Create the collaborator used for a run.
///
/// A missing script is only warned about here; launching it later reports
/// the failure without aborting the run.
pub fn create_collaborator(config: &Config) -> Arc<dyn IndexingCollaborator> {
    if !Path::new(&config.script_path).exists() {
        warn!("⚠️  Indexer script {} does not exist", config.script_path);
    }
    Arc::new(ScriptDispatcher::from_config(config))
}
