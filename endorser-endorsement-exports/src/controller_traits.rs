//! This module exports generic traits representing interfaces for interacting
//! with the endorsement worker.

use crate::types::EndorsementStatus;

/// interface that communicates with the endorsement worker threads
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait EndorsementController: Send + Sync {
    /// Snapshot of the run state: guards, startup gate and progress hints.
    fn get_status(&self) -> EndorsementStatus;

    /// Returns a boxed clone of self.
    /// Useful to allow cloning `Box<dyn EndorsementController>`.
    fn clone_box(&self) -> Box<dyn EndorsementController>;
}

/// Allow cloning `Box<dyn EndorsementController>`
/// Uses `EndorsementController::clone_box` internally
impl Clone for Box<dyn EndorsementController> {
    fn clone(&self) -> Box<dyn EndorsementController> {
        self.clone_box()
    }
}

/// Endorsement manager used to stop the worker threads
pub trait EndorsementManager {
    /// Stop the worker threads.
    /// A cycle in progress is not interrupted: it runs to completion first.
    fn stop(&mut self);
}
