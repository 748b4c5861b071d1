use crate::error::{DescribeError, Result};
use image_describe_common::InMemoryImage;
use std::path::Path;

/// 拡張子とMIMEタイプの対応（ファイル選択の `accept="image/*"` 相当）
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// 拡張子からMIMEタイプを判定（大文字小文字は区別しない）
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, media_type)| *media_type)
}

/// 画像ファイルを読み込む
pub async fn load_image(path: &Path) -> Result<InMemoryImage> {
    if !path.is_file() {
        return Err(DescribeError::FileNotFound(path.display().to_string()));
    }

    let media_type = media_type_for(path)
        .ok_or_else(|| DescribeError::UnsupportedImage(path.display().to_string()))?;

    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(InMemoryImage::new(name, media_type, bytes))
}
