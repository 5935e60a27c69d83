/// Cancellation handle shared by every ordering procedure.
///
/// A `Context` carries an optional deadline and, once tripped, the cause
/// that stopped it. Procedures call `check()` before each unit of work and
/// hand the cause back to the caller untouched.
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Why a context stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Cause {
    /// `cancel()` was called (e.g. the user pressed Ctrl-C).
    #[error("context cancelled")]
    Cancelled,
    /// The deadline passed before the work finished.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

struct Shared {
    deadline: Option<Instant>,
    cause: Mutex<Option<Cause>>,
    tripped: Condvar,
}

/// Cloneable cancellation handle. All clones observe the same state.
#[derive(Clone)]
pub struct Context {
    shared: Arc<Shared>,
}

impl Context {
    /// A context without a deadline. It only stops when `cancel()` is called.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A context that expires `timeout` from now.
    /// Timeouts too large to represent behave like `Context::new()`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Instant::now().checked_add(timeout))
    }

    /// A context that expires at `deadline`. A deadline in the past yields
    /// a context that is already done.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(Some(deadline))
    }

    fn build(deadline: Option<Instant>) -> Self {
        Context {
            shared: Arc::new(Shared {
                deadline,
                cause: Mutex::new(None),
                tripped: Condvar::new(),
            }),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.shared.deadline
    }

    /// Trip the context with `Cause::Cancelled`.
    /// Has no effect if a cause has already been recorded.
    pub fn cancel(&self) {
        let mut cause = self.shared.cause.lock();
        if self.settle(&mut cause).is_none() {
            *cause = Some(Cause::Cancelled);
            self.shared.tripped.notify_all();
        }
    }

    /// The recorded cause, if the context is done.
    pub fn cause(&self) -> Option<Cause> {
        let mut cause = self.shared.cause.lock();
        self.settle(&mut cause)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cause().is_some()
    }

    /// `Err(cause)` once the context is done, `Ok(())` before that.
    #[inline]
    pub fn check(&self) -> Result<(), Cause> {
        match self.cause() {
            Some(cause) => Err(cause),
            None => Ok(()),
        }
    }

    /// Block for `duration`, returning early with the cause if the context
    /// trips in the meantime.
    pub fn sleep(&self, duration: Duration) -> Result<(), Cause> {
        let wake = Instant::now().checked_add(duration);
        let mut cause = self.shared.cause.lock();
        loop {
            if let Some(c) = self.settle(&mut cause) {
                return Err(c);
            }
            let now = Instant::now();
            if wake.is_some_and(|w| now >= w) {
                return Ok(());
            }
            let until = match (wake, self.shared.deadline) {
                (Some(w), Some(d)) => Some(w.min(d)),
                (w, d) => w.or(d),
            };
            match until {
                Some(at) => {
                    self.shared.tripped.wait_until(&mut cause, at);
                }
                None => self.shared.tripped.wait(&mut cause),
            }
        }
    }

    /// Record `DeadlineExceeded` if the deadline passed and nothing else is
    /// recorded yet. Must be called with the lock held.
    fn settle(&self, cause: &mut Option<Cause>) -> Option<Cause> {
        if cause.is_none()
            && self
                .shared
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
        {
            *cause = Some(Cause::DeadlineExceeded);
            self.shared.tripped.notify_all();
        }
        *cause
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.shared.deadline)
            .field("cause", &self.cause())
            .finish()
    }
}
