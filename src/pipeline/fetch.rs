use crate::error::FetchError;
use crate::models::{FactCheckRecord, ResultSet};
use crate::pipeline::traits::FactSource;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_SOURCE_URL: &str =
    "https://fact-check-api-32dx.onrender.com/dashboard/fact-checks/";

pub struct WebFactSource {
    client: Client,
    endpoint: Url,
}

impl WebFactSource {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("factcheck-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl FactSource for WebFactSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        parse_records(&body)
    }
}

/// Fixture file in the same shape the API serves.
pub struct FileFactSource {
    path: PathBuf,
}

impl FileFactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FactSource for FileFactSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&body)
    }
}

pub fn parse_records(body: &str) -> Result<ResultSet, FetchError> {
    let records: Vec<FactCheckRecord> = serde_json::from_str(body)?;
    Ok(ResultSet::new(records))
}
