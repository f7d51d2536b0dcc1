use std::{fmt, str::FromStr};

use crate::Element;

/// The associative operation a table is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Min,
    Max,
    Sum,
    Gcd,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Min,
        Operation::Max,
        Operation::Sum,
        Operation::Gcd,
    ];

    /// Combine two partial results. Associative for every variant.
    #[inline]
    pub fn combine<T: Element>(self, a: T, b: T) -> T {
        match self {
            Operation::Min => a.min(b),
            Operation::Max => a.max(b),
            Operation::Sum => a.add_wrapping(b),
            Operation::Gcd => a.gcd(b),
        }
    }

    /// `combine(x, x) == x`, so two overlapping blocks can answer a query.
    ///
    /// For `Gcd` this holds on non-negative values, which is all the table
    /// ever produces above the base row.
    pub fn is_idempotent(self) -> bool {
        match self {
            Operation::Min | Operation::Max | Operation::Gcd => true,
            Operation::Sum => false,
        }
    }

    pub fn supports_index_query(self) -> bool {
        match self {
            Operation::Min | Operation::Max => true,
            Operation::Sum | Operation::Gcd => false,
        }
    }

    /// Whether the left operand supplies the extremum of `combine(left, right)`.
    /// Ties go left, which keeps reported indices leftmost.
    ///
    /// Only meaningful when [`Self::supports_index_query`] holds.
    #[inline]
    pub fn prefers_left<T: Element>(self, left: T, right: T) -> bool {
        match self {
            Operation::Min => left <= right,
            Operation::Max => left >= right,
            Operation::Sum | Operation::Gcd => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Min => "min",
            Operation::Max => "max",
            Operation::Sum => "sum",
            Operation::Gcd => "gcd",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation {0:?}, expected one of min, max, sum, gcd")]
pub struct ParseOperationError(String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}
