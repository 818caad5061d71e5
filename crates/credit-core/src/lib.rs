//! credit-core
//!
//! Credit decision building blocks.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（CreditScore, Decision, 判定ルール, errors）
//! - **ports**: 抽象化レイヤー（CreditDecisionService）
//! - **impls**: 実装（RemoteDecisionService: 遅いリモート呼び出しの代用）
//! - **app**: アプリケーションロジック（CreditDecisionMaker）
//! - **testing**: テストダブル（MockDecisionService、strict mode）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use app::CreditDecisionMaker;
pub use domain::{CreditScore, Decision, DecisionError, classify};
pub use impls::RemoteDecisionService;
pub use ports::CreditDecisionService;
