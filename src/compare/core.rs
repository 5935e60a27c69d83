/// Comparison rules shared by every ordering procedure.
use std::cmp::Ordering;

/// Types with a default ascending order.
///
/// Floating-point values follow one NaN policy everywhere: a NaN is less
/// than any non-NaN, a NaN equals a NaN, and -0.0 equals 0.0.
pub trait Ordered {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! ordered_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

ordered_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
    [u8], Vec<u8>,
);

macro_rules! ordered_float {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        // Neither is NaN, so partial_cmp always answers.
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

ordered_float!(f32, f64);

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

/// The default comparison rule, usable wherever a `*_by` function wants one.
#[inline]
pub fn ascending<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    a.compare(b)
}

/// Check whether `x` is non-decreasing under `cmp`.
pub fn is_sorted_by<T, F>(x: &[T], cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    x.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}
