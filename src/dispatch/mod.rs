//! Hand-off to the external indexing collaborator
//!
//! The collaborator makes a PDF searchable when asked to, then indexes or
//! deindexes the file on a search-engine core. This module only describes the
//! boundary; [`script::ScriptDispatcher`] is the process-backed implementation.

use async_trait::async_trait;
use std::io::Write;
use thiserror::Error;

use crate::models::{IndexingAction, ScanFlag};

pub mod factory;
pub mod script;

/// Parameters computed for one hand-off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub file_path: String,
    pub is_scanned: ScanFlag,
    pub core_name: String,
    pub action: IndexingAction,
}

impl DispatchRequest {
    /// Argument vector for the collaborator: program first, then
    /// `<path> <isScanned> <core> <action>`.
    pub fn argv(&self, program: &str) -> [String; 5] {
        [
            program.to_string(),
            self.file_path.clone(),
            self.is_scanned.as_arg().to_string(),
            self.core_name.clone(),
            self.action.as_str().to_string(),
        ]
    }
}

/// Everything the collaborator wrote, in the order it was relayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub relayed_stdout_lines: Vec<String>,
    pub relayed_stderr_lines: Vec<String>,
    /// Informational; a non-zero exit is not a dispatch failure
    pub exit_code: Option<i32>,
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to launch indexer '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output of indexer '{program}': {source}")]
    Relay {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Capability to run the OCR + (de)indexing step for one file.
///
/// Implementations write every collaborator line to `relay` as it is read,
/// all of stdout first and then all of stderr, and return the same lines in
/// the outcome.
#[async_trait]
pub trait IndexingCollaborator: Send + Sync {
    async fn process(
        &self,
        request: &DispatchRequest,
        relay: &mut (dyn Write + Send),
    ) -> Result<DispatchOutcome, DispatchError>;

    /// Short identifier for logs
    fn collaborator_type(&self) -> &'static str;
}
