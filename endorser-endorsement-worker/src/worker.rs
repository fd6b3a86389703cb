//! Scheduler and task threads.
//!
//! The scheduler thread owns two tickers. On each tick it tries to take the
//! guard of the matching task and, on success, hands the `RunToken` to that
//! task's thread. A tick that finds the guard held is dropped, so a slow cycle
//! is never re-entered. The token travels with the job and releases the guard
//! when the cycle ends, whichever way it ends.

use crate::context::EndorsementContext;
use crate::controller::{EndorsementControllerImpl, EndorsementManagerImpl};
use crate::reconciler::Reconciliation;
use crate::run_state::{RunToken, TaskGuard};
use crossbeam_channel::{bounded, select, tick, Receiver, RecvTimeoutError, Sender};
use endorser_endorsement_exports::{
    EndorsementChannels, EndorsementConfig, EndorsementController, EndorsementManager,
    EndorsementResult,
};
use endorser_logging::endorser_trace;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

impl EndorsementContext {
    /// Regular cycle: reconcile the current chain tip only.
    pub(crate) fn endorse_tip(&self) -> EndorsementResult<Option<Reconciliation>> {
        if !self.startup_confirmed() {
            debug!("endorse skipped: network not launched");
            return Ok(None);
        }
        let tip = self.channels.block_source.get_chain_tip()?;
        endorser_trace!("endorse_start", { "height": tip.height, "hash": tip.hash.to_string() });
        self.check_and_submit(tip.height, &tip.hash).map(Some)
    }
}

/// Hands a job to a task thread if the task is idle.
fn dispatch(guard: &TaskGuard, job_tx: &Sender<RunToken>) {
    match guard.try_acquire() {
        Some(token) => {
            // the token is dropped with the error, releasing the guard
            if job_tx.try_send(token).is_err() {
                warn!("{} task thread is not accepting jobs", guard.name());
            }
        }
        None => debug!("{} cycle still running, tick skipped", guard.name()),
    }
}

fn run_scheduler(
    context: Arc<EndorsementContext>,
    endorse_tx: Sender<RunToken>,
    check_tx: Sender<RunToken>,
    stop_rx: Receiver<()>,
) {
    let endorse_ticker = tick(context.cfg.endorse_interval.to_duration());
    let check_ticker = tick(context.cfg.check_interval.to_duration());
    let state = &context.state;
    loop {
        select! {
            // message or disconnection of the sender both mean stop
            recv(stop_rx) -> _ => break,
            recv(endorse_ticker) -> _ => dispatch(&state.endorse_guard, &endorse_tx),
            recv(check_ticker) -> _ => dispatch(&state.check_guard, &check_tx),
        }
    }
    debug!("endorsement scheduler stopped");
}

fn run_endorse_task(
    context: Arc<EndorsementContext>,
    job_rx: Receiver<RunToken>,
    stop_rx: Receiver<()>,
) {
    let retry_interval = context.cfg.retry_interval.to_duration();
    for token in job_rx.iter() {
        if let Err(err) = context.endorse_tip() {
            warn!(
                "endorse cycle failed: {}, next cycle in at least {}ms",
                err, context.cfg.retry_interval
            );
            // back off while still holding the guard
            match stop_rx.recv_timeout(retry_interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        drop(token);
    }
}

fn run_check_task(context: Arc<EndorsementContext>, job_rx: Receiver<RunToken>) {
    for token in job_rx.iter() {
        if let Err(err) = context.run_check() {
            warn!("endorse check cycle aborted: {}", err);
        }
        drop(token);
    }
}

fn spawn_named<F>(name: &str, f: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(name.into())
        .spawn(f)
        .expect("could not spawn endorsement worker thread")
}

/// Launches the endorsement scheduler and its two task threads.
///
/// # Returns
/// A pair `(endorsement_manager, endorsement_controller)` where:
/// * `endorsement_manager`: allows to stop the worker
/// * `endorsement_controller`: reads the run state
pub fn start_endorsement_worker(
    cfg: EndorsementConfig,
    channels: EndorsementChannels,
) -> (Box<dyn EndorsementManager>, Box<dyn EndorsementController>) {
    info!(
        "starting endorsement worker for {} (endorse every {}ms, check every {}ms)",
        cfg.account, cfg.endorse_interval, cfg.check_interval
    );
    let context = Arc::new(EndorsementContext::new(cfg, channels));
    let (stop_tx, stop_rx) = bounded::<()>(0);
    let (endorse_tx, endorse_rx) = bounded::<RunToken>(1);
    let (check_tx, check_rx) = bounded::<RunToken>(1);

    let endorse_thread = {
        let context = context.clone();
        let stop_rx = stop_rx.clone();
        spawn_named("endorse task", move || {
            run_endorse_task(context, endorse_rx, stop_rx)
        })
    };
    let check_thread = {
        let context = context.clone();
        spawn_named("endorse check task", move || run_check_task(context, check_rx))
    };
    let scheduler_thread = {
        let context = context.clone();
        spawn_named("endorsement scheduler", move || {
            run_scheduler(context, endorse_tx, check_tx, stop_rx)
        })
    };

    let controller = EndorsementControllerImpl {
        account: context.cfg.account.clone(),
        state: context.state.clone(),
    };
    let manager = EndorsementManagerImpl {
        stop_tx: Some(stop_tx),
        scheduler_thread: Some(scheduler_thread),
        task_threads: vec![endorse_thread, check_thread],
    };
    (Box::new(manager), Box::new(controller))
}
