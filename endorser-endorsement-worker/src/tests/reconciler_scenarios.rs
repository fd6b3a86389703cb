use super::tools::{create_context, submitted};
use crate::reconciler::Reconciliation;
use assert_matches::assert_matches;
use endorser_endorsement_exports::test_exports::{account, create_record, hash_for_height};
use endorser_endorsement_exports::{EndorsementError, MockBlockSource, MockLedgerApi};
use endorser_models::action::{EndorseAction, EndorseOutcome};
use mockall::predicate::eq;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// No record yet: we are the first endorser of the block.
#[test]
fn record_absent_submits() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_endorsement_record()
        .with(eq(100), eq(hash))
        .times(1)
        .returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .withf(move |action: &EndorseAction| {
            action.validator == account("me")
                && action.height == 100
                && action.hash == hash
                && action.contract == account("blkendt.xsat")
        })
        .times(1)
        .returning(|_| Ok(submitted(1)));
    let context = create_context(MockBlockSource::new(), ledger);

    let res = context.check_and_submit(100, &hash).unwrap();

    assert_eq!(res, Reconciliation::Submitted(submitted(1)));
    assert_eq!(context.state.last_endorse_height(), 100);
    assert_eq!(context.state.last_submitted_height(), 100);
    assert!(context.state.last_submission_time().is_some());
}

#[test]
fn already_provided_is_not_resubmitted() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_endorsement_record()
        .returning(|height, hash| Ok(Some(create_record(height, *hash, &["me"], &["me"]))));
    ledger.expect_submit_endorsement().times(0);
    let context = create_context(MockBlockSource::new(), ledger);

    let res = context.check_and_submit(100, &hash).unwrap();

    assert_eq!(res, Reconciliation::AlreadyProvided);
    assert_eq!(context.state.last_endorse_height(), 0);
}

#[test]
fn requested_and_not_provided_submits_once() {
    let hash = hash_for_height(7);
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_endorsement_record().returning(|height, hash| {
        Ok(Some(create_record(height, *hash, &["alice", "me"], &["alice"])))
    });
    ledger
        .expect_submit_endorsement()
        .times(1)
        .returning(|_| Ok(submitted(7)));
    let context = create_context(MockBlockSource::new(), ledger);

    assert_eq!(
        context.check_and_submit(7, &hash).unwrap(),
        Reconciliation::Submitted(submitted(7))
    );
}

#[test]
fn not_requested_is_not_submitted() {
    let hash = hash_for_height(7);
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_endorsement_record()
        .returning(|height, hash| Ok(Some(create_record(height, *hash, &["alice"], &[]))));
    ledger.expect_submit_endorsement().times(0);
    let context = create_context(MockBlockSource::new(), ledger);

    assert_eq!(
        context.check_and_submit(7, &hash).unwrap(),
        Reconciliation::NotRequested
    );
}

/// Once the first submission shows up in the record, a second call is a no-op.
#[test]
fn second_call_does_not_double_submit() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    let mut reads = 0;
    ledger
        .expect_get_endorsement_record()
        .times(2)
        .returning(move |height, hash| {
            reads += 1;
            if reads == 1 {
                Ok(None)
            } else {
                Ok(Some(create_record(height, *hash, &["me"], &["me"])))
            }
        });
    ledger
        .expect_submit_endorsement()
        .times(1)
        .returning(|_| Ok(submitted(1)));
    let context = create_context(MockBlockSource::new(), ledger);

    assert_matches!(
        context.check_and_submit(100, &hash),
        Ok(Reconciliation::Submitted(EndorseOutcome::Submitted { .. }))
    );
    assert_eq!(
        context.check_and_submit(100, &hash).unwrap(),
        Reconciliation::AlreadyProvided
    );
}

/// The regular and catch-up tasks reconciling the same block submit it once.
#[test]
fn concurrent_reconciliations_submit_once() {
    let hash = hash_for_height(100);
    let provided = Arc::new(AtomicBool::new(false));
    let submissions = Arc::new(AtomicUsize::new(0));
    let mut ledger = MockLedgerApi::new();
    {
        let provided = provided.clone();
        ledger
            .expect_get_endorsement_record()
            .returning(move |height, hash| {
                let provider: &[&str] = if provided.load(Ordering::SeqCst) {
                    &["me"]
                } else {
                    &[]
                };
                Ok(Some(create_record(height, *hash, &["me"], provider)))
            });
    }
    {
        let provided = provided.clone();
        let submissions = submissions.clone();
        ledger.expect_submit_endorsement().returning(move |action| {
            submissions.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            provided.store(true, Ordering::SeqCst);
            Ok(submitted(action.height))
        });
    }
    let context = create_context(MockBlockSource::new(), ledger);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| scope.spawn(|| context.check_and_submit(100, &hash).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(submissions.load(Ordering::SeqCst), 1);
    assert!(results.contains(&Reconciliation::AlreadyProvided));
    assert!(results
        .iter()
        .any(|r| matches!(r, Reconciliation::Submitted(EndorseOutcome::Submitted { .. }))));
}

#[test]
fn disabled_endorsement_is_benign() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_endorsement_record().returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .times(1)
        .returning(|_| Ok(EndorseOutcome::EndorsementDisabled));
    let context = create_context(MockBlockSource::new(), ledger);

    assert_eq!(
        context.check_and_submit(100, &hash).unwrap(),
        Reconciliation::Submitted(EndorseOutcome::EndorsementDisabled)
    );
    assert_eq!(context.state.last_endorse_height(), 0);
    assert_eq!(context.state.last_submitted_height(), 0);
}

#[test]
fn already_settled_block_is_benign() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_endorsement_record().returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .returning(|_| Ok(EndorseOutcome::AlreadySettled));
    let context = create_context(MockBlockSource::new(), ledger);

    assert_matches!(
        context.check_and_submit(100, &hash),
        Ok(Reconciliation::Submitted(EndorseOutcome::AlreadySettled))
    );
    assert_eq!(context.state.last_endorse_height(), 0);
}

#[test]
fn other_rejection_is_an_error() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_endorsement_record().returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .times(1)
        .returning(|_| Ok(EndorseOutcome::Rejected("assertion failure".into())));
    let context = create_context(MockBlockSource::new(), ledger);

    assert_eq!(
        context.check_and_submit(100, &hash),
        Err(EndorsementError::SubmissionRejected("assertion failure".into()))
    );
    assert_eq!(context.state.last_endorse_height(), 0);
}

#[test]
fn ledger_read_failure_aborts_before_submission() {
    let hash = hash_for_height(100);
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_endorsement_record()
        .returning(|_, _| Err(EndorsementError::LedgerError("connection refused".into())));
    ledger.expect_submit_endorsement().times(0);
    let context = create_context(MockBlockSource::new(), ledger);

    assert_matches!(
        context.check_and_submit(100, &hash),
        Err(EndorsementError::LedgerError(_))
    );
}

#[test]
fn last_submitted_height_never_decreases() {
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_endorsement_record().returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .returning(|action| Ok(submitted(action.height)));
    let context = create_context(MockBlockSource::new(), ledger);

    context.check_and_submit(105, &hash_for_height(105)).unwrap();
    context.check_and_submit(101, &hash_for_height(101)).unwrap();

    assert_eq!(context.state.last_submitted_height(), 105);
    assert_eq!(context.state.last_endorse_height(), 101);
}
