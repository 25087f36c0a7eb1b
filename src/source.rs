//! Data-source capability
//!
//! The insights engine does no persistence of its own. It reads one user's
//! history through the [`InsightSource`] trait, injected at construction
//! time, which keeps the analysis core trivially testable with in-memory
//! fakes. Implementations must return records ordered ascending by date and
//! an empty list (not an error) when a user has no data.

use crate::model::{JournalEntry, SymptomLog};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors an [`InsightSource`] implementation may surface
///
/// The orchestrator treats any of these as non-fatal: the failure is logged
/// and an empty-but-valid result is returned to the caller.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be reached
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The backing store answered but the read failed
    #[error("data source read failed: {0}")]
    Read(String),
}

/// Read access to one user's tracked history
#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Symptom logs for a user on or after `since`, ascending by date
    async fn fetch_symptom_logs(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<SymptomLog>, SourceError>;

    /// Journal entries for a user on or after `since`, ascending by date
    async fn fetch_journal_entries(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<JournalEntry>, SourceError>;
}

/// In-memory [`InsightSource`] used by tests and the demo binary
#[derive(Debug, Default)]
pub struct MemorySource {
    logs: Vec<SymptomLog>,
    entries: Vec<JournalEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom log
    pub fn push_log(&mut self, log: SymptomLog) {
        self.logs.push(log);
    }

    /// Add a journal entry
    pub fn push_entry(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Builder: seed with symptom logs
    pub fn with_logs(mut self, logs: impl IntoIterator<Item = SymptomLog>) -> Self {
        self.logs.extend(logs);
        self
    }

    /// Builder: seed with journal entries
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = JournalEntry>) -> Self {
        self.entries.extend(entries);
        self
    }
}

#[async_trait]
impl InsightSource for MemorySource {
    async fn fetch_symptom_logs(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<SymptomLog>, SourceError> {
        let mut logs: Vec<SymptomLog> = self
            .logs
            .iter()
            .filter(|l| l.user_id == user_id && l.log_date >= since)
            .cloned()
            .collect();
        logs.sort_by_key(|l| l.log_date);
        Ok(logs)
    }

    async fn fetch_journal_entries(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<JournalEntry>, SourceError> {
        let mut entries: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.user_id == user_id && e.entry_date >= since)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.entry_date);
        Ok(entries)
    }
}
