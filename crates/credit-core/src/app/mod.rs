//! App - アプリケーションロジック
//!
//! ports の trait にだけ依存し、具体的な実装はコンストラクタで受け取ります。

pub mod credit_decision;

pub use self::credit_decision::CreditDecisionMaker;
