use crate::models::common::RecordId;
use crate::models::verdict::{classify, Badge, Verdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fact-check result as served by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckRecord {
    pub id: RecordId,
    #[serde(default)]
    pub query_preview: String,
    /// Raw verdict label. Not validated against the known set.
    #[serde(rename = "case", default)]
    pub verdict: String,
    #[serde(rename = "talk", default)]
    pub explanation: String,
}

impl FactCheckRecord {
    pub fn verdict(&self) -> Option<Verdict> {
        Verdict::from_label(&self.verdict)
    }

    pub fn badge(&self) -> Badge {
        classify(&self.verdict)
    }
}

/// Records in service order, plus when they were fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<FactCheckRecord>,
    fetched_at: Option<DateTime<Utc>>,
}

impl ResultSet {
    pub fn new(records: Vec<FactCheckRecord>) -> Self {
        Self {
            records,
            fetched_at: Some(Utc::now()),
        }
    }

    /// The set held before anything was fetched.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            fetched_at: None,
        }
    }

    pub fn records(&self) -> &[FactCheckRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FactCheckRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FactCheckRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FactCheckRecord;
    type IntoIter = std::slice::Iter<'a, FactCheckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
