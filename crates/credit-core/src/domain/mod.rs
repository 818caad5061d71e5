//! Domain model (score, decision, rule, errors).

pub mod score;
pub mod decision;
pub mod errors;

pub use score::CreditScore;
pub use decision::{Decision, DECLINE_BELOW, MAYBE_UP_TO, classify};
pub use errors::DecisionError;
