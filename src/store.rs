//! Persistence boundary for finished diagnoses.
//!
//! The engine itself never stores anything; a `DiagnosisStore` assigns the
//! identifier and creation date and keeps results per user. `MemoryStore`
//! is a bounded in-memory implementation for tests and embedding.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::result::DiagnosisResult;

/// A diagnosis as persisted: the engine's result plus store-assigned keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDiagnosis {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "diagnosis_date")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub result: DiagnosisResult,
}

/// Assigns id + date on save; retrieval is per submitting user.
pub trait DiagnosisStore {
    fn save(&self, user_id: &str, result: DiagnosisResult) -> StoredDiagnosis;
    fn for_user(&self, user_id: &str) -> Vec<StoredDiagnosis>;
}

#[derive(Debug)]
struct State {
    entries: Vec<StoredDiagnosis>,
    next_id: u64,
}

/// Bounded in-memory store; oldest entries are dropped past the cap.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<State>,
    cap: usize,
}

impl MemoryStore {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.min(10_000);
        Self {
            inner: Mutex::new(State {
                entries: Vec::with_capacity(cap),
                next_id: 1,
            }),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("store mutex poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(1_000)
    }
}

impl DiagnosisStore for MemoryStore {
    fn save(&self, user_id: &str, result: DiagnosisResult) -> StoredDiagnosis {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        let entry = StoredDiagnosis {
            id: guard.next_id.to_string(),
            user_id: user_id.to_string(),
            date: Utc::now().date_naive(),
            result,
        };
        guard.next_id += 1;
        guard.entries.push(entry.clone());
        if guard.entries.len() > self.cap {
            let excess = guard.entries.len() - self.cap;
            guard.entries.drain(0..excess);
        }
        entry
    }

    fn for_user(&self, user_id: &str) -> Vec<StoredDiagnosis> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        guard
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }
}
