use crate::run_state::RunState;
use endorser_endorsement_exports::{EndorsementChannels, EndorsementConfig};
use std::sync::Arc;

/// Everything an endorsement cycle needs, shared by the task threads.
pub(crate) struct EndorsementContext {
    pub(crate) cfg: EndorsementConfig,
    pub(crate) channels: EndorsementChannels,
    pub(crate) state: Arc<RunState>,
}

impl EndorsementContext {
    pub(crate) fn new(cfg: EndorsementConfig, channels: EndorsementChannels) -> Self {
        EndorsementContext {
            cfg,
            channels,
            state: Arc::new(RunState::default()),
        }
    }

    /// Re-checks the startup gate. Scheduled work is a no-op until it opens.
    pub(crate) fn startup_confirmed(&self) -> bool {
        self.state.startup.check(self.channels.ledger.as_ref())
    }
}
