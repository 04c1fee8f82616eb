//! Process-backed indexing collaborator

use async_trait::async_trait;
use std::io::Write;
use std::process::Stdio;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{DispatchError, DispatchOutcome, DispatchRequest, IndexingCollaborator};
use crate::config::Config;
use crate::utils::lines::next_lines;

/// Runs the indexer script with an explicitly provisioned environment
pub struct ScriptDispatcher {
    script_path: String,
    env: Vec<(String, String)>,
}

impl ScriptDispatcher {
    /// The child sees only the variables in `env`; nothing is inherited.
    pub fn new(script_path: impl Into<String>, env: Vec<(String, String)>) -> Self {
        Self {
            script_path: script_path.into(),
            env,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.script_path.clone(), config.collaborator_env())
    }

    fn relay_error(&self, source: std::io::Error) -> DispatchError {
        DispatchError::Relay {
            program: self.script_path.clone(),
            source,
        }
    }
}

#[async_trait]
impl IndexingCollaborator for ScriptDispatcher {
    async fn process(
        &self,
        request: &DispatchRequest,
        relay: &mut (dyn Write + Send),
    ) -> Result<DispatchOutcome, DispatchError> {
        let argv = request.argv(&self.script_path);
        info!("🚀 Dispatching {:?}", argv);

        let mut child = Command::new(&argv[0])
            .args(&argv[1..])
            .env_clear()
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DispatchError::Launch {
                program: self.script_path.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // stderr is buffered while stdout streams through so a chatty child
        // cannot block on a full stderr pipe; it is relayed once stdout ends.
        let stdout_task = async {
            match stdout {
                Some(stdout) => relay_lines(BufReader::new(stdout), &mut *relay).await,
                None => Ok(Vec::new()),
            }
        };
        let stderr_task = async {
            match stderr {
                Some(stderr) => collect_lines(BufReader::new(stderr)).await,
                None => Ok(Vec::new()),
            }
        };
        let (stdout_lines, stderr_lines) = tokio::join!(stdout_task, stderr_task);

        let exit_code = match child.wait().await {
            Ok(status) => {
                if status.success() {
                    debug!("Indexer exited with {}", status);
                } else {
                    warn!("Indexer exited with {}", status);
                }
                status.code()
            }
            Err(e) => {
                warn!("Failed to wait for indexer: {}", e);
                None
            }
        };

        let relayed_stdout_lines = stdout_lines.map_err(|e| self.relay_error(e))?;
        let relayed_stderr_lines = stderr_lines.map_err(|e| self.relay_error(e))?;

        for line in &relayed_stderr_lines {
            writeln!(relay, "{}", line).map_err(|e| self.relay_error(e))?;
        }
        relay.flush().map_err(|e| self.relay_error(e))?;

        Ok(DispatchOutcome {
            relayed_stdout_lines,
            relayed_stderr_lines,
            exit_code,
        })
    }

    fn collaborator_type(&self) -> &'static str {
        "script"
    }
}

/// Write each line to `relay` as soon as it is read
async fn relay_lines<R>(mut reader: R, relay: &mut (dyn Write + Send)) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    while let Some(group) = next_lines(&mut reader).await? {
        for line in group {
            writeln!(relay, "{}", line)?;
            lines.push(line);
        }
        relay.flush()?;
    }
    Ok(lines)
}

async fn collect_lines<R>(mut reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    while let Some(group) = next_lines(&mut reader).await? {
        lines.extend(group);
    }
    Ok(lines)
}
