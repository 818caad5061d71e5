//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **RemoteDecisionService**: リモート呼び出しを模した遅い実装
//!
//! テスト用の実装は `testing` モジュールにあります。

pub mod remote;

pub use self::remote::{DEFAULT_REMOTE_LATENCY, RemoteDecisionService};
