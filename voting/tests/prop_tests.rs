use proptest::prelude::*;

use vws_nullables::{NullSubmitter, SubmitOutcome};
use vws_types::{TargetId, Timestamp};
use vws_verification::{Evidence, VerificationRecord, VerificationResult};
use vws_voting::{marginal_cost, quadratic_cost, CreditLedger, SubmitOrdering, VotingError};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

fn verified(total: u64, ordering: SubmitOrdering) -> CreditLedger {
    let evidence = Evidence::new(vec![7; 16], true, 0.9, Timestamp::from_millis(1));
    let result = VerificationResult {
        verified: true,
        confidence: 0.9,
        timestamp: Timestamp::from_millis(1),
    };
    let mut ledger = CreditLedger::new(total).with_ordering(ordering);
    ledger.mark_verified(VerificationRecord::new(result, &evidence, "prop"));
    ledger
}

fn target(i: u8) -> TargetId {
    TargetId::new(format!("poll-{i}")).unwrap()
}

fn any_ordering() -> impl Strategy<Value = SubmitOrdering> {
    prop_oneof![
        Just(SubmitOrdering::AwaitThenApply),
        Just(SubmitOrdering::Optimistic)
    ]
}

proptest! {
    /// cost(v) == v * v, and marginal costs telescope to it.
    #[test]
    fn cost_law(v in 0u32..100_000) {
        prop_assert_eq!(quadratic_cost(v), u64::from(v) * u64::from(v));
        if v > 0 {
            prop_assert_eq!(quadratic_cost(v) - quadratic_cost(v - 1), marginal_cost(v));
        }
    }

    /// can_afford predicts submit_vote exactly, and the budget is never exceeded.
    #[test]
    fn can_afford_agrees_with_submit(
        total in 0u64..400,
        ordering in any_ordering(),
        ops in prop::collection::vec((0u8..4, 0u32..15), 1..40),
    ) {
        let rt = runtime();
        let mut ledger = verified(total, ordering);
        let submitter = NullSubmitter::new();
        for (t, votes) in ops {
            let target = target(t);
            let predicted = ledger.can_afford(&target, votes);
            let before = ledger.remaining_credits();
            let outcome = rt.block_on(ledger.submit_vote(&submitter, &target, votes));
            prop_assert_eq!(outcome.is_ok(), predicted);
            if outcome.is_err() {
                prop_assert_eq!(ledger.remaining_credits(), before);
            }
            prop_assert!(ledger.spent_credits() <= ledger.total_credits());
            prop_assert_eq!(
                ledger.remaining_credits() + ledger.spent_credits(),
                ledger.total_credits()
            );
        }
    }

    /// Re-submitting the current allocation succeeds and changes nothing.
    #[test]
    fn idempotent_revote(votes in 0u32..=10, ordering in any_ordering()) {
        let rt = runtime();
        let mut ledger = verified(100, ordering);
        let submitter = NullSubmitter::new();
        let target = target(0);
        rt.block_on(ledger.submit_vote(&submitter, &target, votes)).unwrap();
        let remaining = ledger.remaining_credits();
        prop_assert!(ledger.can_afford(&target, votes));
        rt.block_on(ledger.submit_vote(&submitter, &target, votes)).unwrap();
        prop_assert_eq!(ledger.remaining_credits(), remaining);
        prop_assert_eq!(ledger.votes_for(&target), votes);
    }

    /// A failed submission leaves every allocation untouched.
    #[test]
    fn rollback_on_failure(
        ordering in any_ordering(),
        start in 0u32..=7,
        next in 0u32..=7,
        declined in any::<bool>(),
    ) {
        let rt = runtime();
        let mut ledger = verified(100, ordering);
        let submitter = NullSubmitter::new();
        rt.block_on(ledger.submit_vote(&submitter, &target(0), start)).unwrap();
        rt.block_on(ledger.submit_vote(&submitter, &target(1), 3)).unwrap();
        let snapshot: Vec<_> = {
            let mut v: Vec<_> = ledger.allocations().map(|(t, n)| (t.clone(), n)).collect();
            v.sort();
            v
        };

        submitter.push(if declined {
            SubmitOutcome::Decline
        } else {
            SubmitOutcome::Fail("timeout".into())
        });
        let err = rt.block_on(ledger.submit_vote(&submitter, &target(0), next)).unwrap_err();
        prop_assert!(matches!(err, VotingError::SubmissionFailed(_)));

        let mut after: Vec<_> = ledger.allocations().map(|(t, n)| (t.clone(), n)).collect();
        after.sort();
        prop_assert_eq!(after, snapshot);
    }

    /// Unverified ledgers reject every vote, however small.
    #[test]
    fn verification_gate(votes in 0u32..20, t in 0u8..4) {
        let rt = runtime();
        let mut ledger = CreditLedger::new(100);
        let submitter = NullSubmitter::new();
        let err = rt.block_on(ledger.submit_vote(&submitter, &target(t), votes)).unwrap_err();
        prop_assert!(matches!(err, VotingError::VerificationRequired));
        prop_assert!(submitter.calls().is_empty());
    }
}
