//! ビルド時の環境変数から設定を作る
//!
//! ブラウザには環境変数がないため `option_env!` で埋め込む。

use image_describe_common::config::{API_KEY_VAR, ENDPOINT_VAR, FALLBACK_API_KEY_VAR, MODEL_VAR};
use image_describe_common::ClientConfig;

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        API_KEY_VAR => option_env!("IMAGE_DESCRIBE_GROQ_API_KEY"),
        FALLBACK_API_KEY_VAR => option_env!("GROQ_API_KEY"),
        MODEL_VAR => option_env!("IMAGE_DESCRIBE_MODEL"),
        ENDPOINT_VAR => option_env!("IMAGE_DESCRIBE_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(build_env)
}
