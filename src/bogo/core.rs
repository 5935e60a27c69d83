/// Bogosort: shuffle until sorted.
///
/// The expected number of shuffles for n distinct elements is n!, and there
/// is no upper bound at all, so the context is the only practical way out.
/// See https://en.wikipedia.org/wiki/Bogosort.
use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::compare::{Ordered, is_sorted_by};
use crate::context::{Cause, Context};

/// Sort `x` in ascending order by shuffling it until it happens to be sorted.
///
/// When sorting floating-point numbers, NaNs are ordered before other
/// values. A cancelled context leaves `x` in some permutation of its input.
pub fn bogosort<T: Ordered>(ctx: &Context, x: &mut [T]) -> Result<(), Cause> {
    bogosort_by(ctx, x, T::compare)
}

/// Sort `x` in ascending order as determined by `cmp`, one random
/// permutation at a time.
pub fn bogosort_by<T, F>(ctx: &Context, x: &mut [T], cmp: F) -> Result<(), Cause>
where
    F: FnMut(&T, &T) -> Ordering,
{
    bogosort_by_with_rng(ctx, x, cmp, &mut rand::thread_rng())
}

/// Like [`bogosort_by`], drawing permutations from `rng`.
///
/// The context is checked before every attempt, including the first, so a
/// context that is already done always yields its cause.
pub fn bogosort_by_with_rng<T, F, R>(
    ctx: &Context,
    x: &mut [T],
    mut cmp: F,
    rng: &mut R,
) -> Result<(), Cause>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let mut shuffles: u64 = 0;
    loop {
        if let Err(cause) = ctx.check() {
            tracing::debug!(len = x.len(), shuffles, %cause, "bogosort interrupted");
            return Err(cause);
        }
        if is_sorted_by(x, &mut cmp) {
            break;
        }
        // Fisher-Yates: every permutation is equally likely.
        x.shuffle(rng);
        shuffles += 1;
    }

    tracing::debug!(len = x.len(), shuffles, "bogosort finished");
    Ok(())
}
