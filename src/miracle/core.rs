/// Miraclesort: wait until the input is sorted.
///
/// Nothing here ever reorders anything. The input is re-checked at a fixed
/// interval in the hope that something (a stray cosmic ray, another
/// thread) sorts it in the meantime. Only an already sorted input or a
/// done context ends the wait.
///
/// See https://en.wikipedia.org/wiki/Bogosort#Related_algorithms.
use std::cmp::Ordering;
use std::time::Duration;

use parking_lot::RwLock;

use crate::compare::{Ordered, is_sorted_by};
use crate::context::{Cause, Context};

/// Pause between two looks at the input. Short enough to keep Ctrl-C and
/// timeouts feeling immediate.
pub const MIRACLE_INTERVAL: Duration = Duration::from_millis(200);

/// Wait until `x` is sorted in ascending order.
///
/// When sorting floating-point numbers, NaNs are ordered before other
/// values.
pub fn miraclesort<T: Ordered>(ctx: &Context, x: &mut [T]) -> Result<(), Cause> {
    miraclesort_by(ctx, x, T::compare)
}

/// Wait until `x` is sorted as determined by `cmp`.
pub fn miraclesort_by<T, F>(ctx: &Context, x: &mut [T], mut cmp: F) -> Result<(), Cause>
where
    F: FnMut(&T, &T) -> Ordering,
{
    wait_for_miracle(ctx, "miraclesort", || is_sorted_by(x, &mut cmp))
}

/// Wait until the vector behind `x` is sorted as determined by `cmp`.
///
/// The lock is only held while looking, so other threads are free to work
/// the miracle between two looks.
pub fn miraclesort_shared_by<T, F>(ctx: &Context, x: &RwLock<Vec<T>>, mut cmp: F) -> Result<(), Cause>
where
    F: FnMut(&T, &T) -> Ordering,
{
    wait_for_miracle(ctx, "miraclesort_shared", || {
        let guard = x.read();
        is_sorted_by(&guard, &mut cmp)
    })
}

fn wait_for_miracle(
    ctx: &Context,
    name: &'static str,
    mut sorted: impl FnMut() -> bool,
) -> Result<(), Cause> {
    let mut looks: u64 = 0;
    loop {
        if let Err(cause) = ctx.check() {
            tracing::debug!(looks, %cause, "{} interrupted", name);
            return Err(cause);
        }
        looks += 1;
        if sorted() {
            tracing::debug!(looks, "{} witnessed a miracle", name);
            return Ok(());
        }
        if let Err(cause) = ctx.sleep(MIRACLE_INTERVAL) {
            tracing::debug!(looks, %cause, "{} interrupted", name);
            return Err(cause);
        }
    }
}
