/// Sleepsort: let the scheduler do the sorting.
///
/// Every element gets its own thread, which sleeps for a time proportional
/// to the element's key and then hands the element over a rendezvous
/// channel. Elements come out roughly in key order; ties and scheduler
/// jitter are not broken deterministically.
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::context::{Cause, Context};

/// Upper bound on how long the receiver waits for a worker before looking
/// at the context again.
const RACE_TICK: Duration = Duration::from_millis(10);

/// Workers only sleep and send an index.
const WORKER_STACK_SIZE: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum SleepsortError {
    #[error(transparent)]
    Interrupted(#[from] Cause),
    /// The operating system refused another worker thread. Workers started
    /// before the failure have been released and joined.
    #[error("cannot start worker {index} of {total}: {source}")]
    Spawn {
        index: usize,
        total: usize,
        #[source]
        source: io::Error,
    },
}

impl SleepsortError {
    /// The context cause, if that is what stopped the sort.
    pub fn cause(&self) -> Option<Cause> {
        match self {
            SleepsortError::Interrupted(cause) => Some(*cause),
            SleepsortError::Spawn { .. } => None,
        }
    }
}

/// Return the elements of `x` in the order their workers woke up.
///
/// Function `delay(el)` gives the number of milliseconds the worker for
/// `el` sleeps before handing it over. Every element is collected before
/// returning. A done context stops the collection and yields its cause with
/// no partial result. If a worker thread cannot be started, the workers
/// already running are released and `SleepsortError::Spawn` is returned.
/// No thread outlives the call.
pub fn sleepsort_by_key<T, F>(ctx: &Context, x: &[T], delay: F) -> Result<Vec<T>, SleepsortError>
where
    T: Clone + Sync,
    F: Fn(&T) -> u64 + Sync,
{
    sleepsort_with_builder(ctx, x, delay, |_| {
        thread::Builder::new().stack_size(WORKER_STACK_SIZE)
    })
}

/// `sleepsort_by_key` with the thread builder for worker `idx` supplied by
/// `builder`.
pub(crate) fn sleepsort_with_builder<T, F, B>(
    ctx: &Context,
    x: &[T],
    delay: F,
    builder: B,
) -> Result<Vec<T>, SleepsortError>
where
    T: Clone + Sync,
    F: Fn(&T) -> u64 + Sync,
    B: Fn(usize) -> thread::Builder,
{
    ctx.check()?;

    // Workers sleep on `release`, which is tripped whenever the call gives
    // up. The caller's context is never cancelled from here.
    let release = match ctx.deadline() {
        Some(deadline) => Context::with_deadline(deadline),
        None => Context::new(),
    };

    let result = thread::scope(|s| {
        let (tx, rx) = mpsc::sync_channel::<usize>(0);
        for (idx, el) in x.iter().enumerate() {
            if let Err(cause) = ctx.check() {
                release.cancel();
                return Err(SleepsortError::Interrupted(cause));
            }
            let tx = tx.clone();
            let delay = &delay;
            let release = &release;
            let spawned = builder(idx).spawn_scoped(s, move || {
                if release.sleep(Duration::from_millis(delay(el))).is_ok() {
                    // The receiver is gone only if the collection gave up.
                    let _ = tx.send(idx);
                }
            });
            if let Err(source) = spawned {
                release.cancel();
                return Err(SleepsortError::Spawn {
                    index: idx,
                    total: x.len(),
                    source,
                });
            }
        }
        drop(tx);
        let order = collect(ctx, rx, x.len());
        if order.is_err() {
            release.cancel();
        }
        order.map_err(SleepsortError::from)
    });

    match result {
        Ok(order) => {
            tracing::debug!(workers = x.len(), "sleepsort finished");
            Ok(order.into_iter().map(|idx| x[idx].clone()).collect())
        }
        Err(err) => {
            tracing::debug!(workers = x.len(), %err, "sleepsort interrupted");
            Err(err)
        }
    }
}

/// Receive `n` indices, racing each receive against the context.
/// Dropping `rx` on the way out releases any worker blocked in `send`.
fn collect(ctx: &Context, rx: Receiver<usize>, n: usize) -> Result<Vec<usize>, Cause> {
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        ctx.check()?;
        match rx.recv_timeout(RACE_TICK) {
            Ok(idx) => order.push(idx),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Workers only skip their send once the shared deadline passed.
                return Err(ctx.cause().unwrap_or(Cause::DeadlineExceeded));
            }
        }
    }
    Ok(order)
}
