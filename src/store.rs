//! Sled-backed implementation of the storage seams
//!
//! The whole ledger lives under one key as a single minicbor blob, so reads
//! and writes carry full-snapshot semantics just like the tabular store this
//! stands in for. The roster sits under a second key and is read-only to the
//! workflows.
use crate::ledger::{Ledger, LedgerStore};
use crate::roster::{RosterEntry, RosterSource};
use std::path::Path;
use std::sync::Arc;

const LEDGER_KEY: &str = "ledger";
const ROSTER_KEY: &str = "roster";

#[derive(Clone)]
pub struct SledStore {
    db: Arc<sled::Db>,
}

impl SledStore {
    pub fn new(db: Arc<sled::Db>) -> Self {
        Self { db }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(sled::open(path)?)))
    }

    /// Seeds or replaces the roster table.
    pub fn put_roster(&self, entries: &[RosterEntry]) -> anyhow::Result<()> {
        self.db.insert(ROSTER_KEY, minicbor::to_vec(entries)?)?;
        Ok(())
    }
}

impl LedgerStore for SledStore {
    fn read_all(&self) -> anyhow::Result<Ledger> {
        match self.db.get(LEDGER_KEY)? {
            Some(blob) => Ok(minicbor::decode(&blob)?),
            None => Ok(Ledger::new()),
        }
    }

    fn write_all(&self, ledger: &Ledger) -> anyhow::Result<()> {
        self.db.insert(LEDGER_KEY, minicbor::to_vec(ledger)?)?;
        Ok(())
    }
}

impl RosterSource for SledStore {
    fn fetch(&self) -> anyhow::Result<Vec<RosterEntry>> {
        match self.db.get(ROSTER_KEY)? {
            Some(blob) => Ok(minicbor::decode(&blob)?),
            None => Ok(Vec::new()),
        }
    }
}
