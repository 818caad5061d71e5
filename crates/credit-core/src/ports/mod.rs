//! Ports - 抽象化レイヤー
//!
//! 外部システム（リモートの与信判定サービスなど）へのインターフェースを
//! trait として定義し、実装の詳細を隠蔽します。
//! テストでは trait を差し替えることで、遅い依存を切り離せます。

pub mod decision_service;

pub use self::decision_service::CreditDecisionService;
