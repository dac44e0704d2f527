//! At most one mutating request per session may be in flight. A permit is held
//! for the duration of the request and released on drop, including when the
//! request future is cancelled.

use super::ClientError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct MutationGate {
    busy: Arc<AtomicBool>,
}

impl MutationGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the permit for `action`.
    ///
    /// # Errors
    /// Returns [`ClientError::Pending`] while another mutation holds the permit.
    pub fn try_acquire(&self, action: &'static str) -> Result<MutationPermit, ClientError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("rejected {action}: another request is still pending");
            return Err(ClientError::Pending(action));
        }

        Ok(MutationPermit {
            busy: Arc::clone(&self.busy),
        })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct MutationPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for MutationPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
