//! 選択画像の型定義
//!
//! ブラウザ(WASM)とネイティブで共有される:
//! - ImageSource: 選択されたファイルの抽象
//! - InMemoryImage: メモリ上のバイト列を持つ実装

use crate::data_uri::encode_base64;
use crate::error::Result;

/// 選択された画像ファイル
///
/// 読み込みはブラウザでは非同期のため `read_base64` もasync
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    /// 表示用ファイル名
    fn name(&self) -> &str;

    /// 宣言されたMIMEタイプ（例: "image/jpeg"）
    fn media_type(&self) -> &str;

    /// バイトサイズ
    fn size(&self) -> u64;

    /// ファイル全体を読み込みBase64で返す
    async fn read_base64(&self) -> Result<String>;
}

/// メモリ上の画像
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl InMemoryImage {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl ImageSource for InMemoryImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_base64(&self) -> Result<String> {
        Ok(encode_base64(&self.bytes))
    }
}

/// サイズバッジ用の表記（例: "2.00 MB"）
pub fn format_megabytes(size: u64) -> String {
    format!("{:.2} MB", size as f64 / 1024.0 / 1024.0)
}
