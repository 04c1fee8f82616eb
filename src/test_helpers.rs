/*!
 * Test Helpers and Utilities
 *
 * A recording stand-in for the indexing collaborator plus small fixtures,
 * so runs can be exercised without launching any external process.
 */

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::dispatch::{DispatchError, DispatchOutcome, DispatchRequest, IndexingCollaborator};

/// Creates a test configuration pointing at a script that does not need to exist
pub fn create_test_config() -> Config {
    Config {
        script_path: "/tmp/test_indexer.sh".to_string(),
        collaborator_path: "/usr/bin:/bin".to_string(),
        extra_env: Vec::new(),
    }
}

/// Collaborator that records every request and replays canned output
#[derive(Default)]
pub struct RecordingCollaborator {
    requests: Mutex<Vec<DispatchRequest>>,
    stdout_lines: Vec<String>,
    stderr_lines: Vec<String>,
    fail_launch: bool,
}

impl RecordingCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(stdout_lines: &[&str], stderr_lines: &[&str]) -> Self {
        Self {
            stdout_lines: stdout_lines.iter().map(|s| s.to_string()).collect(),
            stderr_lines: stderr_lines.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Behaves like a collaborator whose executable is missing
    pub fn failing_launch() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<DispatchRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl IndexingCollaborator for RecordingCollaborator {
    async fn process(
        &self,
        request: &DispatchRequest,
        relay: &mut (dyn Write + Send),
    ) -> Result<DispatchOutcome, DispatchError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        if self.fail_launch {
            return Err(DispatchError::Launch {
                program: "recording-collaborator".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }

        let relay_error = |source| DispatchError::Relay {
            program: "recording-collaborator".to_string(),
            source,
        };
        for line in self.stdout_lines.iter().chain(&self.stderr_lines) {
            writeln!(relay, "{}", line).map_err(relay_error)?;
        }

        Ok(DispatchOutcome {
            relayed_stdout_lines: self.stdout_lines.clone(),
            relayed_stderr_lines: self.stderr_lines.clone(),
            exit_code: Some(0),
        })
    }

    fn collaborator_type(&self) -> &'static str {
        "recording"
    }
}

/// Writes `content` to a temp file whose name ends in `suffix`
pub fn create_test_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
