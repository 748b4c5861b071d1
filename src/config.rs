use image_describe_common::ClientConfig;

/// プロセスの環境変数から設定を読む
///
/// APIキーがなくても失敗しない（解析時に共通エラーになる）
pub fn from_env() -> ClientConfig {
    ClientConfig::from_lookup(|name| std::env::var(name).ok())
}
