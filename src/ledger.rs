//! Ledger snapshot type and the storage seam it travels through
use crate::request::Request;
use std::sync::{Arc, Mutex};

/// The full collection of submitted requests, in insertion order.
pub type Ledger = Vec<Request>;

/// Full-snapshot storage seam: the backing table offers no partial update
/// primitive, so every mutation is a read of the whole ledger followed by a
/// replace of the whole ledger.
pub trait LedgerStore {
    fn read_all(&self) -> anyhow::Result<Ledger>;
    fn write_all(&self, ledger: &Ledger) -> anyhow::Result<()>;
}

/// In-memory store with the same snapshot semantics, used as the test fake.
/// Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Ledger>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row count as currently persisted, for asserting that failed
    /// submissions left the ledger untouched.
    pub fn len(&self) -> usize {
        self.rows.lock().expect("ledger lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerStore for MemoryStore {
    fn read_all(&self) -> anyhow::Result<Ledger> {
        Ok(self.rows.lock().expect("ledger lock poisoned").clone())
    }

    fn write_all(&self, ledger: &Ledger) -> anyhow::Result<()> {
        *self.rows.lock().expect("ledger lock poisoned") = ledger.clone();
        Ok(())
    }
}
