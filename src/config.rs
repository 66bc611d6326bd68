use std::env;
use std::path::PathBuf;
use url::Url;

use crate::pipeline::DEFAULT_SOURCE_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub source_url: Url,
    /// Read records from this file instead of the network.
    pub fixture: Option<PathBuf>,
    /// Tracing output goes here; the terminal itself belongs to the UI.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read `FACTCHECK_*` variables. Call `dotenv().ok()` first to pick up a
    /// local `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = non_empty("FACTCHECK_SOURCE_URL")
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let source_url = Url::parse(raw_url.trim())
            .map_err(|err| anyhow::anyhow!("invalid FACTCHECK_SOURCE_URL {raw_url:?}: {err}"))?;

        Ok(Self {
            source_url,
            fixture: non_empty("FACTCHECK_FIXTURE").map(PathBuf::from),
            log_file: non_empty("FACTCHECK_LOG_FILE").map(PathBuf::from),
        })
    }
}
