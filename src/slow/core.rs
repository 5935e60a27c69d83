/// Slowsort, the textbook application of the "multiply and surrender"
/// paradigm.
///
/// See: Andrei Broder and Jorge Stolfi. Pessimal Algorithms and Simplexity
/// Analysis. https://doi.org/10.1145/990534.990536
///
/// The recursion is driven by an explicit work list instead of the call
/// stack, so long inputs cannot overflow the thread's stack. The order of
/// steps is exactly that of the recursive definition.
use std::cmp::Ordering;

use crate::compare::Ordered;
use crate::context::{Cause, Context};

/// Pending work, popped from the back of the list.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Sort the inclusive range `i..=j`.
    Sort { i: usize, j: usize },
    /// Both halves of a range are sorted: move the larger of the two
    /// maxima to `j`.
    Settle { mid: usize, j: usize },
}

/// Sort `x` in ascending order.
///
/// When sorting floating-point numbers, NaNs are ordered before other
/// values. A cancelled context leaves `x` partially ordered.
pub fn slowsort<T: Ordered>(ctx: &Context, x: &mut [T]) -> Result<(), Cause> {
    slowsort_by(ctx, x, T::compare)
}

/// Sort `x` in ascending order as determined by `cmp`.
///
/// The context is checked once per recursive step. A cancelled context
/// leaves `x` as a permutation of its input in no particular order.
pub fn slowsort_by<T, F>(ctx: &Context, x: &mut [T], mut cmp: F) -> Result<(), Cause>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if x.is_empty() {
        return ctx.check();
    }

    let mut steps: u64 = 0;
    let mut pending = vec![Step::Sort { i: 0, j: x.len() - 1 }];
    while let Some(step) = pending.pop() {
        match step {
            Step::Sort { i, j } => {
                if let Err(cause) = ctx.check() {
                    tracing::debug!(len = x.len(), steps, %cause, "slowsort interrupted");
                    return Err(cause);
                }
                steps += 1;
                if i >= j {
                    continue;
                }
                let mid = i + (j - i) / 2;
                // Reverse order: sort(i, mid), sort(mid+1, j), settle, sort(i, j-1).
                pending.push(Step::Sort { i, j: j - 1 });
                pending.push(Step::Settle { mid, j });
                pending.push(Step::Sort { i: mid + 1, j });
                pending.push(Step::Sort { i, j: mid });
            }
            Step::Settle { mid, j } => {
                if cmp(&x[j], &x[mid]) == Ordering::Less {
                    x.swap(mid, j);
                }
            }
        }
    }

    tracing::debug!(len = x.len(), steps, "slowsort finished");
    Ok(())
}
