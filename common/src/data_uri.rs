//! Data URIの生成と分解
//!
//! `data:<mediaType>;base64,<payload>` 形式のみ扱う

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// バイト列をBase64（改行なし）に変換
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// MIMEタイプとBase64データからData URIを組み立てる
///
/// # Examples
/// ```
/// use image_describe_common::data_uri::build_data_uri;
///
/// let uri = build_data_uri("image/png", "iVBORw0KGgo=");
/// assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
/// ```
pub fn build_data_uri(media_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", media_type, base64_payload)
}

/// Data URIからBase64データ部分を抽出
///
/// # Arguments
/// * `data_uri` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URI
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn base64_payload(data_uri: &str) -> Option<&str> {
    data_uri.split(',').nth(1)
}
