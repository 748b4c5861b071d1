//! エラー型定義

use thiserror::Error;

/// 画面に表示する唯一の失敗メッセージ
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to analyze image. Please check your API key and try again.";

/// 画像未選択で解析しようとした場合のメッセージ
pub const VALIDATION_MESSAGE: &str = "Please select an image first";

/// 解析処理の共通エラー型
///
/// Displayは診断ログ用の詳細を含む。ユーザーには [`Error::user_message`] を表示する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Read error: {0}")]
    Read(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error: {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty response")]
    EmptyResponse,
}

impl Error {
    /// 原因に関わらず同じ文言を返す
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
