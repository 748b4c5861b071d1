//! クライアント設定
//!
//! 環境変数の読み方はターゲットごとに異なる（ブラウザはビルド時、ネイティブは実行時）ため、
//! ここでは名前解決だけを行い、値の取得は呼び出し側の `lookup` に任せる。

use crate::chat::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// APIキー（優先）
pub const API_KEY_VAR: &str = "IMAGE_DESCRIBE_GROQ_API_KEY";
/// APIキー（フォールバック）
pub const FALLBACK_API_KEY_VAR: &str = "GROQ_API_KEY";
/// モデル上書き
pub const MODEL_VAR: &str = "IMAGE_DESCRIBE_MODEL";
/// エンドポイント上書き
pub const ENDPOINT_VAR: &str = "IMAGE_DESCRIBE_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// 変数名から値を引く関数で設定を組み立てる
    ///
    /// 空白のみの値は未設定とみなす。APIキーがなくてもエラーにはせず、
    /// 診断ログを出して解析時に失敗させる。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).or_else(|| get(FALLBACK_API_KEY_VAR));
        if api_key.is_none() {
            log::error!(
                "API key not found. Set {} or {}.",
                API_KEY_VAR,
                FALLBACK_API_KEY_VAR
            );
        }

        Self {
            api_key,
            model: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.into()),
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.into()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
