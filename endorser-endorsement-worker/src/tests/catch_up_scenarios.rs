use super::tools::{create_context, launched_ledger, submitted};
use crate::catch_up::{compute_start_height, CheckReport};
use assert_matches::assert_matches;
use endorser_endorsement_exports::test_exports::hash_for_height;
use endorser_endorsement_exports::{EndorsementError, MockBlockSource, MockLedgerApi};
use endorser_models::action::EndorseAction;
use endorser_models::block::BlockRef;
use endorser_models::endorsement::ChainState;
use mockall::predicate::eq;
use mockall::Sequence;

fn chain_state(irreversible_height: u64) -> ChainState {
    ChainState {
        irreversible_height,
    }
}

fn tip(height: u64) -> BlockRef {
    BlockRef {
        height,
        hash: hash_for_height(height),
    }
}

#[test]
fn start_height_rule() {
    // fresh process: right after the irreversible height
    assert_eq!(compute_start_height(500, 0, 510, 6), 501);
    // last endorsed height ahead of finality and far enough from the tip
    assert_eq!(compute_start_height(500, 505, 520, 6), 505);
    // last endorsed height within the resume window of the tip
    assert_eq!(compute_start_height(500, 515, 520, 6), 501);
    // last endorsed height right after finality brings nothing
    assert_eq!(compute_start_height(500, 501, 520, 6), 501);
    // last endorsed height behind finality
    assert_eq!(compute_start_height(500, 400, 520, 6), 501);
    // tip lower than the window
    assert_eq!(compute_start_height(0, 3, 4, 6), 1);
    assert_eq!(compute_start_height(u64::MAX, 0, 10, 6), u64::MAX);
}

/// I=500, tip=505, nothing endorsed yet: heights 501..=505 are submitted in order.
#[test]
fn scan_reconciles_heights_in_ascending_order() {
    let mut seq = Sequence::new();
    let mut block_source = MockBlockSource::new();
    let mut ledger = launched_ledger();
    ledger
        .expect_get_chain_state()
        .times(1)
        .returning(|| Ok(chain_state(500)));
    block_source
        .expect_get_chain_tip()
        .times(1)
        .returning(|| Ok(tip(505)));
    ledger
        .expect_get_endorsement_record()
        .returning(|_, _| Ok(None));
    for height in 501..=505 {
        block_source
            .expect_get_hash_at()
            .with(eq(height))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|height| Ok(hash_for_height(height)));
        ledger
            .expect_submit_endorsement()
            .withf(move |action: &EndorseAction| {
                action.height == height && action.hash == hash_for_height(height)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|action| Ok(submitted(action.height)));
    }
    let context = create_context(block_source, ledger);

    assert_eq!(
        context.run_check().unwrap(),
        CheckReport::Scanned {
            start: 501,
            tip: 505
        }
    );
    assert_eq!(context.state.last_endorse_height(), 505);
    assert_eq!(context.state.last_submitted_height(), 505);
}

/// A failure at 503 aborts the scan; 501 and 502 stay endorsed.
#[test]
fn scan_aborts_on_first_error() {
    let mut block_source = MockBlockSource::new();
    let mut ledger = launched_ledger();
    ledger
        .expect_get_chain_state()
        .returning(|| Ok(chain_state(500)));
    block_source.expect_get_chain_tip().returning(|| Ok(tip(505)));
    block_source
        .expect_get_hash_at()
        .withf(|height| *height < 503)
        .times(2)
        .returning(|height| Ok(hash_for_height(height)));
    block_source
        .expect_get_hash_at()
        .with(eq(503))
        .times(1)
        .returning(|_| Err(EndorsementError::BlockSourceError("timeout".into())));
    ledger
        .expect_get_endorsement_record()
        .times(2)
        .returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .times(2)
        .returning(|action| Ok(submitted(action.height)));
    let context = create_context(block_source, ledger);

    assert_matches!(
        context.run_check(),
        Err(EndorsementError::BlockSourceError(_))
    );
    assert_eq!(context.state.last_endorse_height(), 502);
}

#[test]
fn scan_resumes_from_last_endorsed_height() {
    let mut block_source = MockBlockSource::new();
    let mut ledger = launched_ledger();
    ledger
        .expect_get_chain_state()
        .returning(|| Ok(chain_state(500)));
    block_source.expect_get_chain_tip().returning(|| Ok(tip(520)));
    block_source
        .expect_get_hash_at()
        .withf(|height| (505..=520).contains(height))
        .times(16)
        .returning(|height| Ok(hash_for_height(height)));
    ledger
        .expect_get_endorsement_record()
        .returning(|height, hash| {
            Ok(Some(
                endorser_endorsement_exports::test_exports::create_record(
                    height,
                    *hash,
                    &["me"],
                    &["me"],
                ),
            ))
        });
    ledger.expect_submit_endorsement().times(0);
    let context = create_context(block_source, ledger);
    context.state.record_endorsement(505);

    assert_eq!(
        context.run_check().unwrap(),
        CheckReport::Scanned {
            start: 505,
            tip: 520
        }
    );
}

#[test]
fn closed_gate_skips_the_cycle() {
    let mut block_source = MockBlockSource::new();
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_network_launched()
        .times(1)
        .returning(|| Ok(false));
    ledger.expect_get_chain_state().times(0);
    block_source.expect_get_chain_tip().times(0);
    let context = create_context(block_source, ledger);

    assert_eq!(context.run_check().unwrap(), CheckReport::Skipped);
    assert!(!context.state.startup.is_open());
}

#[test]
fn failed_launch_poll_keeps_the_gate_closed() {
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_network_launched()
        .times(1)
        .returning(|| Err(EndorsementError::LedgerError("unreachable".into())));
    ledger.expect_get_chain_state().times(0);
    let context = create_context(MockBlockSource::new(), ledger);

    assert_eq!(context.run_check().unwrap(), CheckReport::Skipped);
    assert!(!context.state.startup.is_open());
}

/// Once open, the gate is never polled again.
#[test]
fn gate_latches_once_open() {
    let mut block_source = MockBlockSource::new();
    let mut ledger = MockLedgerApi::new();
    ledger
        .expect_get_network_launched()
        .times(1)
        .returning(|| Ok(true));
    ledger
        .expect_get_chain_state()
        .times(2)
        .returning(|| Ok(chain_state(510)));
    block_source
        .expect_get_chain_tip()
        .times(2)
        .returning(|| Ok(tip(510)));
    block_source.expect_get_hash_at().times(0);
    let context = create_context(block_source, ledger);

    for _ in 0..2 {
        assert_eq!(
            context.run_check().unwrap(),
            CheckReport::Scanned {
                start: 511,
                tip: 510
            }
        );
    }
    assert!(context.state.startup.is_open());
}

#[test]
fn endorse_tip_reconciles_the_current_tip() {
    let mut block_source = MockBlockSource::new();
    let mut ledger = launched_ledger();
    block_source
        .expect_get_chain_tip()
        .times(1)
        .returning(|| Ok(tip(100)));
    ledger
        .expect_get_endorsement_record()
        .with(eq(100), eq(hash_for_height(100)))
        .returning(|_, _| Ok(None));
    ledger
        .expect_submit_endorsement()
        .times(1)
        .returning(|_| Ok(submitted(100)));
    let context = create_context(block_source, ledger);

    assert_matches!(context.endorse_tip(), Ok(Some(_)));
    assert_eq!(context.state.last_endorse_height(), 100);
}
