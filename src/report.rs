//! Read-only aggregation over a ledger snapshot
use crate::ledger::Ledger;
use crate::request::Status;
use std::collections::BTreeMap;

/// Dashboard counts. A pure function of the snapshot it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub cancelled: usize,
    pub by_reason: BTreeMap<String, usize>,
}

impl LedgerSummary {
    pub fn of(ledger: &Ledger) -> Self {
        let mut summary = Self {
            total: ledger.len(),
            ..Self::default()
        };
        for row in ledger {
            match row.status {
                Status::Pending => summary.pending += 1,
                Status::Approved => summary.approved += 1,
                Status::Cancelled => summary.cancelled += 1,
            }
            *summary
                .by_reason
                .entry(row.reason.as_label().to_string())
                .or_insert(0) += 1;
        }
        summary
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::Approved => self.approved,
            Status::Cancelled => self.cancelled,
        }
    }
}
