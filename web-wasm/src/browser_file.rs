//! ブラウザで選択されたファイル

use gloo::file::futures::read_as_data_url;
use gloo::file::File;
use image_describe_common::{data_uri, Error, ImageSource, Result};

/// `<input type="file">` やドロップで得た画像
#[derive(Debug, Clone)]
pub struct BrowserImage {
    file: File,
    name: String,
    media_type: String,
}

impl BrowserImage {
    pub fn new(file: File) -> Self {
        let name = file.name();
        let media_type = file.raw_mime_type();
        Self { file, name, media_type }
    }

    /// ファイル全体をData URIとして読み込む（プレビュー表示用）
    pub async fn read_data_url(&self) -> Result<String> {
        read_as_data_url(&self.file)
            .await
            .map_err(|e| Error::Read(e.to_string()))
    }
}

impl From<web_sys::File> for BrowserImage {
    fn from(file: web_sys::File) -> Self {
        Self::new(File::from(file))
    }
}

impl ImageSource for BrowserImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.file.size()
    }

    async fn read_base64(&self) -> Result<String> {
        let data_url = self.read_data_url().await?;
        data_uri::base64_payload(&data_url)
            .map(str::to_string)
            .ok_or_else(|| Error::Read(format!("unexpected data URL for {}", self.name)))
    }
}
