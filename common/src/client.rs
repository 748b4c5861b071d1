//! 画像解析クライアント
//!
//! 1. 画像をBase64化（非同期読み込み）
//! 2. Data URIを埋め込んだChat Completionsリクエストを1回送信
//! 3. 最初の候補のテキストをそのまま返す

use crate::chat::{parse_completion, ChatRequest};
use crate::config::ClientConfig;
use crate::data_uri::build_data_uri;
use crate::error::{Error, Result};
use crate::types::ImageSource;

/// HTTP送信の抽象
///
/// 2xxならレスポンス本文を返す。それ以外は `Error::Status`、
/// 通信自体の失敗は `Error::Transport` を返すこと。
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn post_json(&self, url: &str, api_key: &str, body: String) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct AnalysisClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: ChatTransport> AnalysisClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 画像を解析して説明文を返す
    ///
    /// 失敗時は詳細をログに出し、構造化されたエラーを返す。
    /// 画面表示には `Error::user_message` を使うこと。
    pub async fn analyze_image<I: ImageSource>(&self, image: &I) -> Result<String> {
        let result = self.try_analyze(image).await;
        if let Err(e) = &result {
            log::error!("Error analyzing image {}: {}", image.name(), e);
        }
        result
    }

    async fn try_analyze<I: ImageSource>(&self, image: &I) -> Result<String> {
        let encoded = image.read_base64().await?;
        let data_uri = build_data_uri(image.media_type(), &encoded);

        let api_key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let request = ChatRequest::describe_image(&self.config.model, data_uri);
        let body = serde_json::to_string(&request)?;

        let response = self
            .transport
            .post_json(&self.config.endpoint, api_key, body)
            .await?;

        parse_completion(&response)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;

    /// 送信内容を記録し、決められた応答を返すトランスポート
    pub struct MockTransport {
        response: RefCell<Option<Result<String>>>,
        pub requests: RefCell<Vec<(String, String, String)>>,
    }

    impl MockTransport {
        pub fn replying(response: Result<String>) -> Self {
            Self {
                response: RefCell::new(Some(response)),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn with_content(content: &str) -> Self {
            let body = serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            });
            Self::replying(Ok(body.to_string()))
        }

        pub fn call_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl ChatTransport for MockTransport {
        async fn post_json(&self, url: &str, api_key: &str, body: String) -> Result<String> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), api_key.to_string(), body));
            self.response
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(Error::Transport("no more responses".into())))
        }
    }

    /// 読み込みに失敗する画像
    pub struct UnreadableImage;

    impl ImageSource for UnreadableImage {
        fn name(&self) -> &str {
            "broken.png"
        }

        fn media_type(&self) -> &str {
            "image/png"
        }

        fn size(&self) -> u64 {
            0
        }

        async fn read_base64(&self) -> Result<String> {
            Err(Error::Read("NotReadableError".into()))
        }
    }
}
