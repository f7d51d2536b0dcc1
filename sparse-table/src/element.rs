use std::fmt::Debug;

/// Fixed-width signed integers a [`SparseTable`](crate::SparseTable) can hold.
///
/// Sums wrap on overflow instead of panicking. Pick a type wide enough for
/// the largest range sum you expect, e.g. `i128` for many large `i64`s.
pub trait Element: Copy + Ord + Default + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Two's-complement addition. Overflow is not reported.
    fn add_wrapping(self, other: Self) -> Self;

    /// Greatest common divisor of the absolute values. `gcd(0, 0) = 0`.
    fn gcd(self, other: Self) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;

                #[inline]
                fn add_wrapping(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                fn gcd(self, other: Self) -> Self {
                    let mut a = self.wrapping_abs();
                    let mut b = other.wrapping_abs();
                    while b != 0 {
                        let r = a.wrapping_rem(b);
                        a = b;
                        b = r;
                    }
                    // Only `MIN` has no positive counterpart; it stays negative.
                    a.wrapping_abs()
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize);
