//! Static range queries over an immutable integer array.
//!
//! After an O(n lg n) build, min, max and gcd queries take O(1) by combining
//! two overlapping power-of-two blocks. Sums can't overlap blocks, so they
//! cascade over disjoint blocks in O(lg n). For min and max the table also
//! tracks where each extremum came from, so the leftmost position of the
//! answer is available in O(1) too.
//!
//! ```
//! use sparse_table::{Operation, SparseTable};
//!
//! let table = SparseTable::new(&[2i64, -3, 4, 1, 0, -1, -1, 5, 6], Operation::Min).unwrap();
//! assert_eq!(table.query(2, 7), Ok(-1));
//! assert_eq!(table.query_index(2, 7), Ok(5));
//! ```

mod element;
mod error;
mod log_table;
mod operation;

use std::ops::{Bound, RangeBounds};

pub use element::Element;
pub use error::{Error, Result};
pub use log_table::LogTable;
pub use operation::{Operation, ParseOperationError};

/// O(1) idempotent queries, O(lg n) sums, O(n lg n) words of space.
///
/// Every query checks its bounds and reports [`Error::InvalidRange`] rather
/// than panicking. Sums wrap on overflow; see [`Element`].
#[derive(Debug, Clone)]
pub struct SparseTable<T = i64> {
    /// The number of elements.
    n: usize,
    /// floor(lg n), the highest level.
    levels: usize,
    op: Operation,
    /// Packed rows of n elements. Row p, column i covers [i, i + 2^p).
    /// Columns with i + 2^p > n are never written.
    table: Vec<T>,
    /// Same layout as `table`: the input position each value came from.
    /// Only built for min and max.
    index: Option<Vec<usize>>,
    log: LogTable,
}

impl<T: Element> SparseTable<T> {
    /// Build the table for `op` over a copy of `values`.
    pub fn new(values: &[T], op: Operation) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        let levels = n.ilog2() as usize;
        log::debug!("building {op} sparse table: n={n}, rows={}", levels + 1);

        let mut table = vec![T::default(); n * (levels + 1)];
        table[..n].copy_from_slice(values);
        let mut index = op.supports_index_query().then(|| {
            let mut index = vec![0; n * (levels + 1)];
            for (i, slot) in index[..n].iter_mut().enumerate() {
                *slot = i;
            }
            index
        });

        for p in 1..=levels {
            let half = 1 << (p - 1);
            let prev = (p - 1) * n;
            let cur = p * n;
            for i in 0..=n - (1 << p) {
                let left = table[prev + i];
                let right = table[prev + i + half];
                table[cur + i] = op.combine(left, right);
                if let Some(index) = &mut index {
                    // Propagate the position of the winning half.
                    index[cur + i] = if op.prefers_left(left, right) {
                        index[prev + i]
                    } else {
                        index[prev + i + half]
                    };
                }
            }
            log::trace!("level {p}: {} blocks of length {}", n - (1 << p) + 1, 1usize << p);
        }

        Ok(Self {
            n,
            levels,
            op,
            table,
            index,
            log: LogTable::new(n),
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: empty inputs are rejected by [`Self::new`].
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn operation(&self) -> Operation {
        self.op
    }

    /// The highest level, floor(lg n). Rows `0..=levels()` exist.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The input array, as copied at construction.
    pub fn values(&self) -> &[T] {
        &self.table[..self.n]
    }

    /// The combined value over `[start, start + 2^level)`, if that block fits.
    pub fn get(&self, level: usize, start: usize) -> Option<T> {
        if level > self.levels || start + (1 << level) > self.n {
            return None;
        }
        Some(self.table[level * self.n + start])
    }

    /// Combine the values in the closed interval `[left, right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        self.check_range(left, right)?;
        if !self.op.is_idempotent() {
            return Ok(self.cascading_query(left, right));
        }
        let (p, l, r) = self.cover(left, right);
        Ok(self.op.combine(self.table[p * self.n + l], self.table[p * self.n + r]))
    }

    /// [`Self::query`] with Rust range syntax, e.g. `table.query_range(2..8)`.
    pub fn query_range(&self, range: impl RangeBounds<usize>) -> Result<T> {
        let (left, right) = self.closed_bounds(range)?;
        self.query(left, right)
    }

    /// The leftmost position in `[left, right]` holding the min (or max).
    ///
    /// Sum and gcd tables have no meaningful position and always return
    /// [`Error::UnsupportedOperation`].
    pub fn query_index(&self, left: usize, right: usize) -> Result<usize> {
        let Some(index) = &self.index else {
            return Err(Error::UnsupportedOperation(self.op));
        };
        self.check_range(left, right)?;
        let (p, l, r) = self.cover(left, right);
        let row = p * self.n;
        Ok(if self.op.prefers_left(self.table[row + l], self.table[row + r]) {
            index[row + l]
        } else {
            index[row + r]
        })
    }

    /// The level and the starts of the two (possibly overlapping) blocks
    /// that exactly cover `[left, right]`.
    #[inline]
    fn cover(&self, left: usize, right: usize) -> (usize, usize, usize) {
        let p = self.log.floor_log2(right - left + 1);
        (p, left, right + 1 - (1 << p))
    }

    /// Sum `[left, right]` by peeling off disjoint blocks, largest first.
    fn cascading_query(&self, mut left: usize, right: usize) -> T {
        let mut acc = T::ZERO;
        for p in (0..=self.levels).rev() {
            if left > right {
                break;
            }
            if 1 << p <= right - left + 1 {
                acc = self.op.combine(acc, self.table[p * self.n + left]);
                left += 1 << p;
            }
        }
        acc
    }

    fn check_range(&self, left: usize, right: usize) -> Result<()> {
        if left > right || right >= self.n {
            return Err(Error::InvalidRange {
                left,
                right,
                len: self.n,
            });
        }
        Ok(())
    }

    fn closed_bounds(&self, range: impl RangeBounds<usize>) -> Result<(usize, usize)> {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.n,
        };
        if start >= end {
            return Err(Error::InvalidRange {
                left: start,
                right: end.wrapping_sub(1),
                len: self.n,
            });
        }
        Ok((start, end - 1))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VALUES: [i64; 9] = [2, -3, 4, 1, 0, -1, -1, 5, 6];

    fn table(op: Operation) -> SparseTable {
        SparseTable::new(&VALUES, op).unwrap()
    }

    #[test]
    fn worked_examples() {
        assert_eq!(table(Operation::Min).query(2, 7), Ok(-1));
        assert_eq!(table(Operation::Min).query_index(2, 7), Ok(5));
        assert_eq!(table(Operation::Max).query(0, 8), Ok(6));
        assert_eq!(table(Operation::Sum).query(0, 8), Ok(13));
        assert_eq!(table(Operation::Gcd).query(0, 3), Ok(1));
    }

    #[test]
    fn shape() {
        let t = table(Operation::Max);
        assert_eq!(t.len(), 9);
        assert_eq!(t.levels(), 3);
        assert_eq!(t.values(), &VALUES);
        assert_eq!(t.operation(), Operation::Max);
        assert!(!t.is_empty());
        assert_eq!(t.get(3, 1), Some(6));
        assert_eq!(t.get(3, 2), None);
        assert_eq!(t.get(4, 0), None);
    }

    #[test]
    fn levels_follow_the_recurrence() {
        for op in Operation::ALL {
            let t = table(op);
            for p in 1..=t.levels() {
                for i in 0..=t.len() - (1 << p) {
                    let left = t.get(p - 1, i).unwrap();
                    let right = t.get(p - 1, i + (1 << (p - 1))).unwrap();
                    assert_eq!(t.get(p, i), Some(op.combine(left, right)), "{op} p={p} i={i}");
                }
            }
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            SparseTable::<i64>::new(&[], Operation::Min).unwrap_err(),
            Error::EmptyInput
        );
    }

    #[test]
    fn single_element() {
        let t = SparseTable::new(&[-7i32], Operation::Min).unwrap();
        assert_eq!(t.levels(), 0);
        assert_eq!(t.query(0, 0), Ok(-7));
        assert_eq!(t.query_index(0, 0), Ok(0));
        let t = SparseTable::new(&[-7i32], Operation::Sum).unwrap();
        assert_eq!(t.query(0, 0), Ok(-7));
    }

    #[test]
    fn bad_ranges() {
        let t = table(Operation::Min);
        let err = Error::InvalidRange {
            left: 3,
            right: 2,
            len: 9,
        };
        assert_eq!(t.query(3, 2), Err(err));
        assert_eq!(t.query_index(3, 2), Err(err));
        assert!(matches!(t.query(0, 9), Err(Error::InvalidRange { .. })));
        assert!(matches!(t.query_range(4..4), Err(Error::InvalidRange { .. })));
        assert!(matches!(t.query_range(..10), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn range_syntax() {
        let t = table(Operation::Sum);
        assert_eq!(t.query_range(..), Ok(13));
        assert_eq!(t.query_range(2..8), t.query(2, 7));
        assert_eq!(t.query_range(2..=7), t.query(2, 7));
        assert_eq!(t.query_range(5..), t.query(5, 8));
    }

    #[test]
    fn index_queries_need_an_extremum() {
        for op in [Operation::Sum, Operation::Gcd] {
            let t = table(op);
            assert_eq!(t.query_index(0, 8), Err(Error::UnsupportedOperation(op)));
            // Reported before the range is looked at.
            assert_eq!(t.query_index(5, 1), Err(Error::UnsupportedOperation(op)));
        }
    }

    #[test]
    fn max_ties_go_left() {
        let t = SparseTable::new(&[1i64, 9, 3, 9, 9, 2], Operation::Max).unwrap();
        assert_eq!(t.query_index(0, 5), Ok(1));
        assert_eq!(t.query_index(2, 5), Ok(3));
        assert_eq!(t.query_index(4, 5), Ok(4));
    }

    #[test]
    fn gcd_of_negatives_is_positive() {
        let t = SparseTable::new(&[-6i64, -9, 12], Operation::Gcd).unwrap();
        assert_eq!(t.query(0, 1), Ok(3));
        assert_eq!(t.query(0, 0), Ok(6));
        assert_eq!(t.query(0, 2), Ok(3));
    }

    #[test]
    fn sum_wraps_on_overflow() {
        let t = SparseTable::new(&[i8::MAX, 1], Operation::Sum).unwrap();
        assert_eq!(t.query(0, 1), Ok(i8::MIN));
        let wide: Vec<i128> = [i8::MAX, 1].iter().map(|&x| x as i128).collect();
        let t = SparseTable::new(&wide, Operation::Sum).unwrap();
        assert_eq!(t.query(0, 1), Ok(128));
    }
}
