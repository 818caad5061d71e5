//! Decision model: the three outcomes and the rule that picks one.
//!
//! The rule is a pure function of the score. Anything slow (remote calls,
//! simulated latency) lives behind the `CreditDecisionService` port instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CreditScore, DecisionError};

/// Scores strictly below this are declined.
pub const DECLINE_BELOW: i32 = 550;

/// Scores from `DECLINE_BELOW` up to and including this are a maybe.
pub const MAYBE_UP_TO: i32 = 675;

/// Outcome of a credit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Declined,
    Maybe,
    Approved,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Declined, Decision::Maybe, Decision::Approved];

    /// Applies the decision rule to `score`.
    pub fn for_score(score: CreditScore) -> Self {
        match score.value() {
            s if s < DECLINE_BELOW => Decision::Declined,
            s if s <= MAYBE_UP_TO => Decision::Maybe,
            _ => Decision::Approved,
        }
    }

    /// The customer-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Declined => "Declined",
            Decision::Maybe => "Maybe",
            Decision::Approved => "We look forward to doing business with you!",
        }
    }
}

/// Classifies a score into one of the three decisions.
///
/// Total over all integers and side-effect free.
pub fn classify(score: impl Into<CreditScore>) -> Decision {
    Decision::for_score(score.into())
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Decision {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decision::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| DecisionError::UnknownLabel(s.to_string()))
    }
}
