//! Persistence seams for readings and alerts.
//!
//! The PostgreSQL implementations live in the `persistence` crate. The
//! in-memory implementations here back unit tests and local runs and can be
//! switched into a failing mode to simulate storage faults.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::{Alert, Reading};

/// Authoritative store of raw readings.
#[async_trait::async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist a reading. Failure fails the ingestion call.
    async fn save(&self, reading: &Reading) -> Result<(), StorageError>;

    /// All readings of a batch, most recent first.
    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Reading>, StorageError>;

    /// Cheap connectivity check used by health checks.
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Store of threshold-violation alerts.
#[async_trait::async_trait]
pub trait AlertStore: Send + Sync {
    async fn save(&self, alert: &Alert) -> Result<(), StorageError>;

    /// All alerts of a batch, most recent first.
    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Alert>, StorageError>;
}

/// Append-only in-memory store with fault injection.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    operations: AtomicUsize,
}

pub type InMemoryReadingStore = InMemoryStore<Reading>;
pub type InMemoryAlertStore = InMemoryStore<Alert>;

impl<T: Clone + Send + Sync> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            operations: AtomicUsize::new(0),
        }
    }

    /// Store whose writes always fail.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_fail_writes(true);
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of save and load calls received, failed ones included.
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Snapshot of stored records in insertion order.
    pub async fn records(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn push(&self, record: &T, operation: &'static str) -> Result<(), StorageError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::new(operation, "simulated storage fault"));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn select<K, F>(
        &self,
        operation: &'static str,
        filter: F,
        sort_key: impl Fn(&T) -> K,
    ) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
        K: Ord,
    {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::new(operation, "simulated storage fault"));
        }
        let mut selected: Vec<T> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| filter(*r))
            .cloned()
            .collect();
        selected.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        Ok(selected)
    }
}

impl<T: Clone + Send + Sync> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn save(&self, reading: &Reading) -> Result<(), StorageError> {
        self.push(reading, "save reading").await
    }

    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Reading>, StorageError> {
        self.select("load readings", |r| r.batch_id == batch_id, |r| r.timestamp)
            .await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::new("ping store", "simulated storage fault"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AlertStore for InMemoryAlertStore {
    async fn save(&self, alert: &Alert) -> Result<(), StorageError> {
        self.push(alert, "save alert").await
    }

    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Alert>, StorageError> {
        self.select("load alerts", |a| a.batch_id == batch_id, |a| a.created_at)
            .await
    }
}
