//! 画像説明アプリのネイティブ実行環境
//!
//! ブラウザ版と同じ解析クライアントを、環境変数の設定とreqwestで動かす。

pub mod config;
pub mod error;
pub mod image_file;
pub mod transport;

use image_describe_common::{AnalysisClient, ClientConfig};
use std::path::Path;

pub use transport::ReqwestTransport;

pub type NativeClient = AnalysisClient<ReqwestTransport>;

/// 設定からクライアントを作成
pub fn native_client(config: ClientConfig) -> NativeClient {
    AnalysisClient::new(config, ReqwestTransport::new())
}

/// ファイルを読み込み、説明文を返す
pub async fn describe_file(client: &NativeClient, path: &Path) -> error::Result<String> {
    let image = image_file::load_image(path).await?;
    Ok(client.analyze_image(&image).await?)
}
