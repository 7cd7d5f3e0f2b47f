//! Overlap detection against an employee's active requests
use crate::ledger::Ledger;
use crate::request::{Interval, Status};
use crate::roster::normalize;

/// Outcome of an admissibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    NoConflict,
    /// Carries the first conflicting interval for the user-facing message.
    Conflict(Interval),
}

/// Decides whether `candidate` collides with any non-cancelled request for
/// the same employee in the given ledger snapshot.
///
/// Rows whose stored date or times do not parse are skipped, not treated as
/// conflicts: the table is externally editable and a stray edit must not
/// block submissions. Comparison is at timestamp granularity, so several
/// intervals on the same day coexist as long as their half-open ranges do
/// not intersect. The first conflict found wins; only existence matters.
pub fn check(employee_id: &str, candidate: &Interval, ledger: &Ledger) -> Clearance {
    let employee_id = normalize(employee_id);

    for row in ledger {
        if normalize(&row.employee_id) != employee_id || row.status == Status::Cancelled {
            continue;
        }
        let Some(existing) = row.interval() else {
            tracing::warn!(
                request_id = %row.request_id,
                date = %row.date,
                start_time = %row.start_time,
                end_time = %row.end_time,
                "skipping ledger row with unparsable interval"
            );
            continue;
        };
        if candidate.overlaps(&existing) {
            return Clearance::Conflict(existing);
        }
    }

    Clearance::NoConflict
}
