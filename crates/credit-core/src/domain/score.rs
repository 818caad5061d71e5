//! Credit score: the single input of a decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A creditworthiness measure.
///
/// Any `i32` is accepted: negative or very large scores are classified by the
/// same thresholds as everything else.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditScore(i32);

impl CreditScore {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for CreditScore {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<CreditScore> for i32 {
    fn from(score: CreditScore) -> Self {
        score.0
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
