use crate::error::FetchError;
use crate::models::{FactCheckRecord, ResultSet};
use crate::pipeline::traits::FactSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Always returns the same records.
pub struct StaticSource {
    records: Vec<FactCheckRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<FactCheckRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl FactSource for StaticSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        Ok(ResultSet::new(self.records.clone()))
    }
}

/// Always fails with the given message.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl FactSource for FailingSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        Err(FetchError::other(self.message.clone()))
    }
}

/// Replays a fixed sequence of outcomes, one per call, and counts calls.
/// Once the script runs out every further call fails.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<FactCheckRecord>, String>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, records: Vec<FactCheckRecord>) -> Self {
        self.push(Ok(records));
        self
    }

    pub fn then_err(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, step: Result<Vec<FactCheckRecord>, String>) {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(step);
    }
}

#[async_trait]
impl FactSource for ScriptedSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        match step {
            Some(Ok(records)) => Ok(ResultSet::new(records)),
            Some(Err(message)) => Err(FetchError::other(message)),
            None => Err(FetchError::other("script exhausted")),
        }
    }
}
