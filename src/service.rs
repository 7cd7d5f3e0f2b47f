//! Service layer API for the submission and review workflows
use crate::error::{ReviewError, StoreError, SubmitError};
use crate::ledger::{Ledger, LedgerStore};
use crate::overlap::{self, Clearance};
use crate::report::LedgerSummary;
use crate::request::{Interval, Request, RequestDraft, Status, DATE_FORMAT, TIMESTAMP_FORMAT, TIME_FORMAT};
use crate::roster::{self, RosterIndex, RosterSource};
use crate::utils;
use chrono::Utc;

/// Administrator verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Cancel,
}

/// Orchestrates roster lookup, overlap validation and ledger mutation over
/// injected collaborators.
///
/// Mutations are read-modify-write over the full snapshot with no
/// concurrency control, matching the backing table's read/replace contract.
/// Under the single-admin, low-frequency usage this is built for that is an
/// accepted limitation: two racing writers can admit an overlapping pair or
/// lose a decision.
pub struct LeaveService<L, R> {
    ledger: L,
    roster: R,
}

impl<L, R> LeaveService<L, R>
where
    L: LedgerStore,
    R: RosterSource,
{
    pub fn new(ledger: L, roster: R) -> Self {
        Self { ledger, roster }
    }

    fn read_ledger(&self) -> Result<Ledger, StoreError> {
        self.ledger.read_all().map_err(|e| {
            tracing::error!(error = %e, "failed to read ledger snapshot");
            StoreError::Read(e)
        })
    }

    fn write_ledger(&self, ledger: &Ledger) -> Result<(), StoreError> {
        self.ledger.write_all(ledger).map_err(|e| {
            tracing::error!(error = %e, "failed to write ledger back");
            StoreError::Write(e)
        })
    }

    /// End-to-end admission of one new request.
    ///
    /// Nothing is appended unless every check passes, and a write failure is
    /// surfaced rather than retried.
    pub fn submit(&self, draft: RequestDraft) -> Result<Request, SubmitError> {
        // Roster is re-fetched per submission; a fetch failure degrades to an
        // empty index and the submission reports UnknownEmployee.
        let roster = RosterIndex::load(&self.roster);
        let identity = roster
            .lookup(draft.employee_id())
            .ok_or_else(|| SubmitError::UnknownEmployee(roster::normalize(draft.employee_id())))?;

        let candidate =
            Interval::new(draft.start(), draft.end()).ok_or(SubmitError::InvalidInterval {
                start: draft.start(),
                end: draft.end(),
            })?;

        let mut ledger = self.read_ledger()?;

        if let Clearance::Conflict(existing) =
            overlap::check(&identity.employee_id, &candidate, &ledger)
        {
            return Err(SubmitError::SchedulingConflict(existing));
        }

        let request = Request {
            request_id: utils::new_request_id(),
            employee_id: identity.employee_id,
            display_name: identity.display_name,
            reason: draft.reason(),
            details: draft.details().to_string(),
            status: Status::Pending,
            remark: String::new(),
            date: candidate.start.format(DATE_FORMAT).to_string(),
            start_time: candidate.start.format(TIME_FORMAT).to_string(),
            end_time: candidate.end.format(TIME_FORMAT).to_string(),
            submitted_at: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        ledger.push(request.clone());
        self.write_ledger(&ledger)?;

        Ok(request)
    }

    /// Pending requests in ledger (insertion) order.
    pub fn list_pending(&self) -> Result<Vec<Request>, StoreError> {
        let ledger = self.read_ledger()?;
        Ok(ledger
            .into_iter()
            .filter(|row| row.status == Status::Pending)
            .collect())
    }

    /// Applies an administrator decision to a pending request.
    ///
    /// Rows that already left Pending are refused without touching the
    /// store; the lifecycle only moves Pending -> Approved or
    /// Pending -> Cancelled, never back.
    pub fn decide(
        &self,
        request_id: &str,
        decision: Decision,
        remark: &str,
    ) -> Result<Request, ReviewError> {
        let mut ledger = self.read_ledger()?;

        let row = ledger
            .iter_mut()
            .find(|row| row.request_id == request_id)
            .ok_or_else(|| ReviewError::UnknownRequest(request_id.to_string()))?;

        if row.status != Status::Pending {
            return Err(ReviewError::AlreadyDecided {
                id: row.request_id.clone(),
                status: row.status,
            });
        }

        row.status = match decision {
            Decision::Approve => Status::Approved,
            Decision::Cancel => Status::Cancelled,
        };
        row.remark = remark.to_string();
        let updated = row.clone();

        self.write_ledger(&ledger)?;

        Ok(updated)
    }

    /// Dashboard counts over the current snapshot.
    pub fn summary(&self) -> Result<LedgerSummary, StoreError> {
        Ok(LedgerSummary::of(&self.read_ledger()?))
    }
}
