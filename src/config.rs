use anyhow::{anyhow, Result};
use std::env;
use tracing::info;

pub const DEFAULT_SCRIPT_PATH: &str = "/media/sf_VirtualBoxShared/indexer.sh";
pub const FALLBACK_COLLABORATOR_PATH: &str = "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

/// Deployment settings for the external indexing collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Script that performs OCR and (de)indexing
    pub script_path: String,
    /// PATH handed to the script; must reach the OCR and search-engine client tools
    pub collaborator_path: String,
    /// Additional variables for the script's environment
    pub extra_env: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: DEFAULT_SCRIPT_PATH.to_string(),
            collaborator_path: FALLBACK_COLLABORATOR_PATH.to_string(),
            extra_env: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let script_path = get("INDEXER_SCRIPT_PATH").unwrap_or_else(|| DEFAULT_SCRIPT_PATH.to_string());

        let collaborator_path = match get("INDEXER_PATH") {
            Some(path) => path,
            None => match get("PATH") {
                Some(path) => {
                    info!("INDEXER_PATH not set, handing the current PATH to the indexer script");
                    path
                }
                None => FALLBACK_COLLABORATOR_PATH.to_string(),
            },
        };

        let extra_env = match get("INDEXER_EXTRA_ENV") {
            Some(raw) => parse_extra_env(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            script_path,
            collaborator_path,
            extra_env,
        })
    }

    /// Full environment for the collaborator process
    pub fn collaborator_env(&self) -> Vec<(String, String)> {
        let mut vars = vec![("PATH".to_string(), self.collaborator_path.clone())];
        vars.extend(self.extra_env.iter().cloned());
        vars
    }
}

/// Parse `KEY=VALUE;KEY2=VALUE2`
fn parse_extra_env(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| anyhow!("INDEXER_EXTRA_ENV entry '{}' is not KEY=VALUE", entry))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(anyhow!("INDEXER_EXTRA_ENV entry '{}' has an empty key", entry));
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
