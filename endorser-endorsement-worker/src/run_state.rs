//! In-memory run state shared by the scheduler, the task threads and the controller.
//!
//! Nothing here is persisted. The height hints only narrow the catch-up scan:
//! losing them on restart makes the next scan wider, never wrong.

use endorser_endorsement_exports::LedgerApi;
use endorser_models::block::BlockHeight;
use endorser_time::EndorserTime;
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Non-reentrancy guard of a periodic task.
pub(crate) struct TaskGuard {
    name: &'static str,
    running: Arc<AtomicBool>,
}

impl TaskGuard {
    pub(crate) fn new(name: &'static str) -> Self {
        TaskGuard {
            name,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Takes the guard if no cycle of this task is in flight.
    pub(crate) fn try_acquire(&self) -> Option<RunToken> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunToken {
                running: self.running.clone(),
            })
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }
}

/// Proof that a cycle holds its task guard. Releases the guard when dropped,
/// including during unwinding.
#[must_use]
pub(crate) struct RunToken {
    running: Arc<AtomicBool>,
}

impl Drop for RunToken {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Process-wide latch opened once the ledger reports the network as launched.
#[derive(Default)]
pub(crate) struct StartupGate {
    confirmed: AtomicBool,
}

impl StartupGate {
    pub(crate) fn is_open(&self) -> bool {
        self.confirmed.load(Ordering::Acquire)
    }

    /// Returns whether scheduled work may run, polling the ledger while the gate is closed.
    /// A failed poll keeps the gate closed until the next tick.
    pub(crate) fn check(&self, ledger: &dyn LedgerApi) -> bool {
        if self.is_open() {
            return true;
        }
        match ledger.get_network_launched() {
            Ok(true) => {
                if !self.confirmed.swap(true, Ordering::AcqRel) {
                    info!("network launched, endorsement enabled");
                }
                true
            }
            Ok(false) => {
                debug!("network not launched yet");
                false
            }
            Err(err) => {
                warn!("could not check whether the network is launched: {}", err);
                false
            }
        }
    }
}

pub(crate) struct RunState {
    pub(crate) endorse_guard: TaskGuard,
    pub(crate) check_guard: TaskGuard,
    pub(crate) startup: StartupGate,
    /// Held across the record read and the submission of one height, so the
    /// two tasks never both submit the same block.
    pub(crate) reconcile_lock: Mutex<()>,
    last_endorse_height: AtomicU64,
    last_submitted_height: AtomicU64,
    last_submission_time: RwLock<Option<EndorserTime>>,
}

impl Default for RunState {
    fn default() -> Self {
        RunState {
            endorse_guard: TaskGuard::new("endorse"),
            check_guard: TaskGuard::new("endorse check"),
            startup: StartupGate::default(),
            reconcile_lock: Mutex::new(()),
            last_endorse_height: AtomicU64::new(0),
            last_submitted_height: AtomicU64::new(0),
            last_submission_time: RwLock::new(None),
        }
    }
}

impl RunState {
    pub(crate) fn last_endorse_height(&self) -> BlockHeight {
        self.last_endorse_height.load(Ordering::Acquire)
    }

    pub(crate) fn last_submitted_height(&self) -> BlockHeight {
        self.last_submitted_height.load(Ordering::Acquire)
    }

    pub(crate) fn last_submission_time(&self) -> Option<EndorserTime> {
        *self.last_submission_time.read()
    }

    /// An `endorse` transaction for `height` was accepted by the ledger.
    pub(crate) fn record_endorsement(&self, height: BlockHeight) {
        self.last_endorse_height.store(height, Ordering::Release);
        match EndorserTime::now() {
            Ok(now) => *self.last_submission_time.write() = Some(now),
            Err(err) => warn!("could not read the current time: {}", err),
        }
    }

    /// Never decreases.
    pub(crate) fn record_submission(&self, height: BlockHeight) {
        self.last_submitted_height.fetch_max(height, Ordering::AcqRel);
    }
}
