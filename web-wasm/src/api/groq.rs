//! Groq Chat Completions 呼び出し（fetch API）

use image_describe_common::{ChatTransport, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchで送信するトランスポート
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl ChatTransport for FetchTransport {
    async fn post_json(&self, url: &str, api_key: &str, body: String) -> Result<String> {
        let (status, text) = fetch(url, api_key, &body)
            .await
            .map_err(|e| Error::Transport(describe_js_error(&e)))?;

        if !(200..300).contains(&status) {
            return Err(Error::Status { status, body: text });
        }

        Ok(text)
    }
}

/// POSTしてステータスと本文を返す
async fn fetch(url: &str, api_key: &str, body: &str) -> std::result::Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", api_key))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JsValueのエラーを文字列化（TypeError等のmessageを優先）
fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
