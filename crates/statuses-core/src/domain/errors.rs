//! Errors - ステータス定義の読み込みとバッチ解決のエラー
//!
//! descriptor の構築そのものは失敗しません。
//! エラーになるのは JSON の decode と、名前の重複だけです。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("failed to decode status definition: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON array or object of status definitions, got {0}")]
    InvalidDefinitions(String),

    #[error("status '{0}' is defined more than once")]
    DuplicateStatus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
