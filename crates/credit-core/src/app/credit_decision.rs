//! CreditDecisionMaker: delegates a credit decision to the decision service.

use crate::domain::{CreditScore, Decision, DecisionError};
use crate::ports::CreditDecisionService;

/// Makes credit decisions through a `CreditDecisionService`.
///
/// The service is supplied at construction and cannot be swapped afterwards.
/// Pass `&service` or an `Arc` when the caller needs to inspect it later.
#[derive(Debug)]
pub struct CreditDecisionMaker<S> {
    service: S,
}

impl<S: CreditDecisionService> CreditDecisionMaker<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Calls the service exactly once and returns its answer as is.
    ///
    /// Errors from the service are not retried or mapped.
    pub fn make_credit_decision(
        &self,
        score: impl Into<CreditScore>,
    ) -> Result<Decision, DecisionError> {
        let score = score.into();
        tracing::debug!(%score, "delegating credit decision");
        self.service.get_decision(score)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{DEFAULT_REMOTE_LATENCY, RemoteDecisionService};
    use crate::testing::{Arg, MockDecisionService, Times};
    use rstest::rstest;
    use std::time::Instant;

    #[rstest]
    // passes although incorrect: the mock never applies the rule
    #[case::mock_ignores_rule(677, "Declined")]
    #[case::low(100, "Declined")]
    #[case::just_below_maybe(549, "Declined")]
    #[case::maybe_lower_bound(550, "Maybe")]
    #[case::maybe_upper_bound(675, "Maybe")]
    #[case::approved(676, "We look forward to doing business with you!")]
    fn mocked_make_credit_decision_returns_expected_result(
        #[case] score: i32,
        #[case] expected: &str,
    ) {
        let programmed: Decision = expected.parse().unwrap();
        let mock = MockDecisionService::new().returning(score, programmed);
        let decision_maker = CreditDecisionMaker::new(&mock);

        let result = decision_maker.make_credit_decision(score).unwrap();

        assert_eq!(result.label(), expected);
        // called into the service, with the same score, and the answer came back untouched
        mock.verify(Arg::Any, Times::Once).unwrap();
        mock.verify(Arg::score(score), Times::Once).unwrap();
        mock.verify_all().unwrap();
    }

    #[test]
    fn mocked_decision_skips_remote_latency() {
        let mock = MockDecisionService::new().returning(10000, Decision::Approved);
        let decision_maker = CreditDecisionMaker::new(&mock);

        let started = Instant::now();
        let result = decision_maker.make_credit_decision(10000).unwrap();

        assert!(started.elapsed() < DEFAULT_REMOTE_LATENCY);
        assert_eq!(result, Decision::Approved);
    }

    #[test]
    fn service_failure_propagates_unchanged() {
        let mock = MockDecisionService::new().failing(600, "timed out");
        let decision_maker = CreditDecisionMaker::new(&mock);

        let err = decision_maker.make_credit_decision(600).unwrap_err();

        assert_eq!(err, DecisionError::Service("timed out".to_string()));
        mock.verify(Arg::score(600), Times::Once).unwrap();
    }

    #[test]
    fn unprogrammed_score_fails_strict_mock() {
        let mock = MockDecisionService::new().returning(600, Decision::Maybe);
        let decision_maker = CreditDecisionMaker::new(&mock);

        let err = decision_maker.make_credit_decision(601).unwrap_err();

        assert_eq!(
            err,
            DecisionError::Unprogrammed {
                score: CreditScore::new(601)
            }
        );
        assert!(mock.verify_all().is_err());
    }

    #[test]
    fn owned_service_is_reachable_for_inspection() {
        let decision_maker =
            CreditDecisionMaker::new(MockDecisionService::new().returning(550, Decision::Maybe));

        decision_maker.make_credit_decision(550).unwrap();

        assert_eq!(decision_maker.service().call_count(), 1);
    }

    /// Same table against the real service: each case pays the full latency,
    /// and nothing can verify how the service was called.
    mod real_service {
        use super::*;

        #[rstest]
        #[case::low(100, "Declined")]
        #[case::just_below_maybe(549, "Declined")]
        #[case::maybe_lower_bound(550, "Maybe")]
        #[case::maybe_upper_bound(675, "Maybe")]
        #[case::approved(676, "We look forward to doing business with you!")]
        fn make_credit_decision_returns_expected_result(
            #[case] score: i32,
            #[case] expected: &str,
        ) {
            let decision_maker = CreditDecisionMaker::new(RemoteDecisionService::new());

            let result = decision_maker.make_credit_decision(score).unwrap();

            assert_eq!(result.label(), expected);
        }

        // fails as expected: the real rule approves 678
        #[test]
        #[should_panic]
        fn make_credit_decision_catches_incorrect_expectation() {
            let decision_maker = CreditDecisionMaker::new(RemoteDecisionService::new());

            let result = decision_maker.make_credit_decision(678).unwrap();

            assert_eq!(result.label(), "Declined");
        }
    }
}
