use crate::error::FetchError;
use crate::models::ResultSet;
use async_trait::async_trait;

/// Read-only source of fact-check records.
///
/// One call is one request; implementations never retry on their own.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch(&self) -> Result<ResultSet, FetchError>;
}
