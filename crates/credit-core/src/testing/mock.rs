//! MockDecisionService - strict, recording stand-in for the decision service.
//!
//! Results are programmed per score. A call with any other score is still
//! recorded but answered with `DecisionError::Unprogrammed`, and shows up
//! again when the test verifies its expectations.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use thiserror::Error;

use crate::domain::{CreditScore, Decision, DecisionError};
use crate::ports::CreditDecisionService;

/// Which calls a verification counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Any,
    Eq(CreditScore),
}

impl Arg {
    pub fn score(score: impl Into<CreditScore>) -> Self {
        Arg::Eq(score.into())
    }

    fn matches(self, score: CreditScore) -> bool {
        match self {
            Arg::Any => true,
            Arg::Eq(expected) => expected == score,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Any => f.write_str("<any>"),
            Arg::Eq(score) => write!(f, "{score}"),
        }
    }
}

/// How many matching calls a verification expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Never,
    Once,
    Exactly(usize),
    AtLeastOnce,
}

impl Times {
    fn accepts(self, actual: usize) -> bool {
        match self {
            Times::Never => actual == 0,
            Times::Once => actual == 1,
            Times::Exactly(n) => actual == n,
            Times::AtLeastOnce => actual >= 1,
        }
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Times::Never => f.write_str("never"),
            Times::Once => f.write_str("exactly once"),
            Times::Exactly(n) => write!(f, "exactly {n} time(s)"),
            Times::AtLeastOnce => f.write_str("at least once"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("expected get_decision({arg}) to be called {expected}, but it was called {actual} time(s); calls={calls:?}")]
    CallCount {
        arg: Arg,
        expected: Times,
        actual: usize,
        calls: Vec<CreditScore>,
    },

    #[error("get_decision({score}) was programmed but never called")]
    NotCalled { score: CreditScore },

    #[error("get_decision({score}) was called without being programmed")]
    Unprogrammed { score: CreditScore },
}

#[derive(Debug, Default)]
pub struct MockDecisionService {
    programmed: HashMap<CreditScore, Result<Decision, DecisionError>>,
    calls: Mutex<Vec<CreditScore>>,
}

impl MockDecisionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs `decision` as the answer for `score`, whatever the rule says.
    pub fn returning(mut self, score: impl Into<CreditScore>, decision: Decision) -> Self {
        self.programmed.insert(score.into(), Ok(decision));
        self
    }

    /// Programs a service failure for `score`.
    pub fn failing(mut self, score: impl Into<CreditScore>, message: impl Into<String>) -> Self {
        self.programmed
            .insert(score.into(), Err(DecisionError::Service(message.into())));
        self
    }

    pub fn calls(&self) -> Vec<CreditScore> {
        self.lock_calls().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    pub fn verify(&self, arg: Arg, times: Times) -> Result<(), VerifyError> {
        let calls = self.calls();
        let actual = calls.iter().filter(|s| arg.matches(**s)).count();
        if times.accepts(actual) {
            Ok(())
        } else {
            Err(VerifyError::CallCount {
                arg,
                expected: times,
                actual,
                calls,
            })
        }
    }

    /// Every programmed score was called, and nothing else was.
    pub fn verify_all(&self) -> Result<(), VerifyError> {
        let calls = self.calls();
        if let Some(score) = calls.iter().find(|s| !self.programmed.contains_key(*s)) {
            return Err(VerifyError::Unprogrammed { score: *score });
        }

        let mut programmed: Vec<_> = self.programmed.keys().copied().collect();
        programmed.sort();
        match programmed.into_iter().find(|s| !calls.contains(s)) {
            Some(score) => Err(VerifyError::NotCalled { score }),
            None => Ok(()),
        }
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CreditScore>> {
        // a panicking test thread must not hide the calls it already made
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CreditDecisionService for MockDecisionService {
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError> {
        self.lock_calls().push(score);
        match self.programmed.get(&score) {
            Some(result) => result.clone(),
            None => Err(DecisionError::Unprogrammed { score }),
        }
    }
}
