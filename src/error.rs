use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}")]
    UnsupportedImage(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] image_describe_common::Error),
}

pub type Result<T> = std::result::Result<T, DescribeError>;
