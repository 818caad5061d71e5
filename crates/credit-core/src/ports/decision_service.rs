//! CreditDecisionService port - スコアから Decision を取得
//!
//! # 実装
//! - **RemoteDecisionService**: 本番相当（遅い、ブロッキング）
//! - **MockDecisionService**: テスト用（strict mode、呼び出しを記録）

use std::sync::Arc;

use crate::domain::{CreditScore, Decision, DecisionError};

/// CreditDecisionService はスコアに対する Decision を返す
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
/// - `&self` で呼べるので、記録が必要な実装は内部可変性を使う
pub trait CreditDecisionService: Send + Sync {
    /// Returns the decision for `score`. May block.
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError>;
}

impl<T: CreditDecisionService + ?Sized> CreditDecisionService for &T {
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError> {
        (**self).get_decision(score)
    }
}

impl<T: CreditDecisionService + ?Sized> CreditDecisionService for Box<T> {
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError> {
        (**self).get_decision(score)
    }
}

impl<T: CreditDecisionService + ?Sized> CreditDecisionService for Arc<T> {
    fn get_decision(&self, score: CreditScore) -> Result<Decision, DecisionError> {
        (**self).get_decision(score)
    }
}
