//! 型定義モジュール
//!
//! ドメインエンティティの型定義を提供

/// リンク関連の型定義
pub mod link;

pub use link::{Link, LinkHeaders, LAST_CHECKED_FORMAT};
