//! Image Describe Common Library
//!
//! Web(WASM)とネイティブで共有される型・画面状態・解析クライアント

pub mod types;
pub mod error;
pub mod config;
pub mod data_uri;
pub mod chat;
pub mod client;
pub mod session;
pub mod markdown;

pub use types::{ImageSource, InMemoryImage, format_megabytes};
pub use error::{Error, Result, GENERIC_FAILURE_MESSAGE, VALIDATION_MESSAGE};
pub use config::ClientConfig;
pub use chat::{ChatRequest, ChatResponse, parse_completion};
pub use client::{AnalysisClient, ChatTransport};
pub use session::{OperationState, Panel, Session, Ticket};
pub use markdown::render_markdown;
