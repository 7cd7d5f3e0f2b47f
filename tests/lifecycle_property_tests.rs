//! Property-based tests for the request lifecycle and reporting view
//!
//! Drives the service with randomly generated submission/decision sequences
//! against the in-memory store and checks the invariants that must hold at
//! every point: accepted rows are well-ordered, decided rows never return to
//! the pending queue, and the summary always accounts for every row exactly
//! once.

use chrono::{NaiveDate, NaiveDateTime};
use leave_approval::{
    ledger::{LedgerStore, MemoryStore},
    report::LedgerSummary,
    request::{Reason, RequestDraft, Status},
    roster::FixedRoster,
    service::{Decision, LeaveService},
};
use proptest::prelude::*;

fn at(day: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, day)
        .unwrap()
        .and_hms_opt(minute / 60, minute % 60, 0)
        .unwrap()
}

fn reason_strategy() -> impl Strategy<Value = Reason> {
    prop_oneof![
        Just(Reason::Sick),
        Just(Reason::AnnualLeave),
        Just(Reason::FamilyMatter),
        Just(Reason::SpecialLeave),
        Just(Reason::Other),
    ]
}

fn decision_strategy() -> impl Strategy<Value = Decision> {
    prop::bool::ANY.prop_map(|b| if b { Decision::Approve } else { Decision::Cancel })
}

/// Strategy to generate a batch of non-overlapping submissions: each draft
/// gets its own day, so admission never depends on the order proptest picks.
fn submissions_strategy() -> impl Strategy<Value = Vec<(Reason, u32)>> {
    prop::collection::vec((reason_strategy(), 60u32..1380), 1..12)
}

proptest! {
    /// Property: every accepted request satisfies start < end and enters the
    /// ledger as Pending with an empty remark.
    #[test]
    fn prop_accepted_rows_are_pending_and_ordered(subs in submissions_strategy()) {
        let store = MemoryStore::new();
        let roster = FixedRoster::new(vec![("117102", "Abel")]);
        let service = LeaveService::new(store.clone(), roster);

        for (day, (reason, minute)) in subs.iter().enumerate() {
            let day = day as u32 + 1;
            let draft = RequestDraft::new("117102", at(day, *minute), at(day, minute + 30))
                .set_reason(*reason);
            let request = service.submit(draft).unwrap();

            prop_assert_eq!(request.status, Status::Pending);
            prop_assert!(request.remark.is_empty());
            let interval = request.interval().unwrap();
            prop_assert!(interval.start < interval.end);
        }

        prop_assert_eq!(store.len(), subs.len());
    }

    /// Property: once decided, a request never reappears in the pending
    /// queue, and deciding it again is always refused.
    #[test]
    fn prop_decided_rows_stay_decided(
        subs in submissions_strategy(),
        decisions in prop::collection::vec(decision_strategy(), 12),
    ) {
        let store = MemoryStore::new();
        let roster = FixedRoster::new(vec![("117102", "Abel")]);
        let service = LeaveService::new(store.clone(), roster);

        let mut ids = Vec::new();
        for (day, (reason, minute)) in subs.iter().enumerate() {
            let day = day as u32 + 1;
            let draft = RequestDraft::new("117102", at(day, *minute), at(day, minute + 30))
                .set_reason(*reason);
            ids.push(service.submit(draft).unwrap().request_id);
        }

        // decide an arbitrary prefix of the submissions
        let decided = subs.len() / 2;
        for (id, decision) in ids.iter().take(decided).zip(&decisions) {
            service.decide(id, *decision, "done").unwrap();
        }

        let pending = service.list_pending().unwrap();
        prop_assert_eq!(pending.len(), subs.len() - decided);
        for row in &pending {
            prop_assert!(!ids[..decided].contains(&row.request_id));
        }

        // re-deciding any settled row is a refusal, not a transition
        for (id, decision) in ids.iter().take(decided).zip(&decisions) {
            prop_assert!(service.decide(id, *decision, "again").is_err());
        }
    }

    /// Property: the summary partitions the ledger. Status counts and reason
    /// counts each sum to the total.
    #[test]
    fn prop_summary_partitions_the_ledger(
        subs in submissions_strategy(),
        decisions in prop::collection::vec(decision_strategy(), 12),
    ) {
        let store = MemoryStore::new();
        let roster = FixedRoster::new(vec![("117102", "Abel")]);
        let service = LeaveService::new(store.clone(), roster);

        let mut ids = Vec::new();
        for (day, (reason, minute)) in subs.iter().enumerate() {
            let day = day as u32 + 1;
            let draft = RequestDraft::new("117102", at(day, *minute), at(day, minute + 30))
                .set_reason(*reason);
            ids.push(service.submit(draft).unwrap().request_id);
        }
        for (id, decision) in ids.iter().zip(&decisions) {
            service.decide(id, *decision, "").unwrap();
        }

        let summary = service.summary().unwrap();
        let ledger = store.read_all().unwrap();

        prop_assert_eq!(summary.total, ledger.len());
        prop_assert_eq!(
            summary.pending + summary.approved + summary.cancelled,
            summary.total
        );
        prop_assert_eq!(
            summary.by_reason.values().sum::<usize>(),
            summary.total
        );
        prop_assert_eq!(summary, LedgerSummary::of(&ledger));
    }
}
