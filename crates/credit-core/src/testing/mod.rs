//! Testing - テストダブル
//!
//! 遅い `RemoteDecisionService` の代わりに使う、記録付きの strict mock。
//! `cfg(test)` か `testing` feature のときだけコンパイルされます。

pub mod mock;

pub use self::mock::{Arg, MockDecisionService, Times, VerifyError};
