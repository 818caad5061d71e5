//! Errors returned across the decision service port.

use thiserror::Error;

use super::CreditScore;

/// DecisionError はサービス呼び出しのエラー
///
/// The orchestrator never handles these; they reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// A strict test double was called with a score nobody programmed.
    #[error("no decision programmed for score={score}")]
    Unprogrammed { score: CreditScore },

    /// The decision service itself reported a failure.
    #[error("decision service failed: {0}")]
    Service(String),

    #[error("unknown decision label: {0:?}")]
    UnknownLabel(String),
}
