//! RemoteDecisionService - stands in for a slow remote decision service.

use std::thread;
use std::time::Duration;

use crate::domain::{CreditScore, Decision, DecisionError};
use crate::ports::CreditDecisionService;

/// Simulated round trip of the remote call.
pub const DEFAULT_REMOTE_LATENCY: Duration = Duration::from_millis(2500);

/// Applies the decision rule after blocking the calling thread for `latency`.
///
/// The result is deterministic; only the wall-clock cost is not.
#[derive(Debug, Clone)]
pub struct RemoteDecisionService {
    latency: Duration,
}

impl RemoteDecisionService {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_REMOTE_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for RemoteDecisionService {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditDecisionService for RemoteDecisionService {
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError> {
        tracing::debug!(%score, latency_ms = self.latency.as_millis() as u64, "calling remote decision service");
        thread::sleep(self.latency);
        Ok(Decision::for_score(score))
    }
}
