//! This module implements an endorsement controller.
//! See `endorser-endorsement-exports/controller_traits.rs` for functional details.

use crate::run_state::RunState;
use crossbeam_channel::Sender;
use endorser_endorsement_exports::{EndorsementController, EndorsementManager, EndorsementStatus};
use endorser_models::account::AccountName;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{info, warn};

#[derive(Clone)]
/// implementation of the endorsement controller
pub struct EndorsementControllerImpl {
    pub(crate) account: AccountName,
    pub(crate) state: Arc<RunState>,
}

impl EndorsementController for EndorsementControllerImpl {
    fn get_status(&self) -> EndorsementStatus {
        EndorsementStatus {
            account: self.account.clone(),
            startup_confirmed: self.state.startup.is_open(),
            endorse_running: self.state.endorse_guard.is_running(),
            check_running: self.state.check_guard.is_running(),
            last_endorse_height: self.state.last_endorse_height(),
            last_submitted_height: self.state.last_submitted_height(),
            last_submission_time: self.state.last_submission_time(),
        }
    }

    /// Returns a boxed clone of self.
    /// Allows cloning `Box<dyn EndorsementController>`,
    /// see `endorser-endorsement-exports/controller_traits.rs`
    fn clone_box(&self) -> Box<dyn EndorsementController> {
        Box::new(self.clone())
    }
}

/// Implementation of the endorsement manager
/// Allows stopping the endorsement worker
pub struct EndorsementManagerImpl {
    /// dropping it signals every thread to stop
    pub(crate) stop_tx: Option<Sender<()>>,
    pub(crate) scheduler_thread: Option<JoinHandle<()>>,
    pub(crate) task_threads: Vec<JoinHandle<()>>,
}

impl EndorsementManager for EndorsementManagerImpl {
    /// stops the worker
    fn stop(&mut self) {
        info!("stopping endorsement worker...");
        std::mem::drop(self.stop_tx.take());
        // the scheduler owns the job senders: once it is gone the task threads
        // finish their current cycle and exit
        if let Some(join_handle) = self.scheduler_thread.take() {
            if let Err(err) = join_handle.join() {
                warn!("endorsement scheduler panicked: {:?}", err);
            }
        }
        for join_handle in self.task_threads.drain(..) {
            if let Err(err) = join_handle.join() {
                warn!("endorsement task thread panicked: {:?}", err);
            }
        }
        info!("endorsement worker stopped");
    }
}
