//! Chat Completions API のリクエスト/レスポンス型
//!
//! OpenAI互換形式（Groq）。画像はData URIで `image_url` パートに埋め込む。

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 画像説明の固定プロンプト
pub const DESCRIBE_PROMPT: &str = "What's in this image? Please provide a detailed description.";

/// 既定モデル
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// 既定エンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Chat Completions リクエスト
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_completion_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
    pub stop: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatRequest {
    /// 画像1枚 + 固定プロンプトのリクエストを作成
    pub fn describe_image(model: &str, data_uri: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: DESCRIBE_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri },
                    },
                ],
            }],
            temperature: 1.0,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            top_p: 1.0,
            stream: false,
            stop: None,
        }
    }
}

/// Chat Completions レスポンス
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// レスポンス本文から最初の候補のテキストを取り出す
///
/// テキストは加工しない（前後の空白やMarkdownもそのまま）
pub fn parse_completion(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(Error::EmptyResponse)
}
