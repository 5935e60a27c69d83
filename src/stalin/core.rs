/// Stalinsort: elements out of order are removed.
///
/// A single left-to-right pass keeps the first element and then every
/// element that is not less than the last one kept. The result is a
/// non-decreasing subsequence of the input, though not necessarily the
/// longest one.
///
/// See https://mastodon.social/@mathew/100958177234287431.
use std::cmp::Ordering;

use crate::compare::Ordered;
use crate::context::{Cause, Context};

/// Return the elements of `x` that are already in ascending order.
///
/// For floating-point types, a NaN is considered less than any non-NaN, a
/// NaN is considered equal to a NaN, and -0.0 is equal to 0.0.
pub fn stalinsort<T: Ordered + Clone>(ctx: &Context, x: &[T]) -> Result<Vec<T>, Cause> {
    stalinsort_by(ctx, x, T::compare)
}

/// Return the elements of `x` that are already in the order determined by
/// `cmp`. Equal elements are always kept.
///
/// The context is checked once per element; a done context yields its cause
/// and no partial result.
pub fn stalinsort_by<T, F>(ctx: &Context, x: &[T], mut cmp: F) -> Result<Vec<T>, Cause>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut kept: Vec<T> = Vec::with_capacity(x.len());
    for el in x {
        if let Err(cause) = ctx.check() {
            tracing::debug!(len = x.len(), kept = kept.len(), %cause, "stalinsort interrupted");
            return Err(cause);
        }
        let keep = match kept.last() {
            None => true,
            Some(last) => cmp(el, last) != Ordering::Less,
        };
        if keep {
            kept.push(el.clone());
        }
    }

    tracing::debug!(len = x.len(), kept = kept.len(), "stalinsort finished");
    Ok(kept)
}
