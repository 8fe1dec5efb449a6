//! リンクプローバー
//!
//! 登録済みリンクへ順番にGETを送り、HTTP 200かどうかで稼働状況を判定する。
//! 定期実行は行わず、`/api/ping` からの要求時のみ動作する。

pub mod link_prober;

pub use link_prober::{LinkProber, ProbeOutcome};
