//! 解析フローの結合テスト
//!
//! ローカルのモックHTTPサーバに対して、reqwest経由の解析と画面状態の遷移を検証

use image_describe::{describe_file, native_client, NativeClient};
use image_describe_common::{
    ClientConfig, Error, ImageSource, InMemoryImage, OperationState, Panel, Session,
    GENERIC_FAILURE_MESSAGE, VALIDATION_MESSAGE, format_megabytes,
};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// 受け取ったリクエスト
struct Captured {
    head: String,
    body: String,
}

/// 1回だけ応答するモックサーバを起動し、エンドポイントURLを返す
async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 8192];

        // ヘッダ終端まで読む
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "リクエスト途中で切断");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(Captured { head, body });
    });

    (format!("http://{}/openai/v1/chat/completions", addr), rx)
}

fn client_for(endpoint: String) -> NativeClient {
    native_client(ClientConfig {
        endpoint,
        ..ClientConfig::with_api_key("gsk_test")
    })
}

fn completion(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn jpeg(size: usize) -> InMemoryImage {
    let mut bytes = vec![0u8; size];
    bytes[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    InMemoryImage::new("apple.jpg", "image/jpeg", bytes)
}

/// 2MBのJPEGを解析し、結果がそのまま表示される
#[tokio::test]
async fn test_two_megabyte_jpeg_scenario() {
    let (endpoint, captured) = serve_once("200 OK", &completion("A red apple on a table.")).await;
    let client = client_for(endpoint);
    let mut session = Session::new();

    session.select_file(jpeg(2 * 1024 * 1024));
    let size = session.selected().map(|f| f.size()).unwrap();
    assert_eq!(format_megabytes(size), "2.00 MB");

    assert!(session.analyze(&client).await);
    assert_eq!(session.result(), Some("A red apple on a table."));
    assert_eq!(session.panel(), Panel::Success("A red apple on a table."));

    let request = captured.await.expect("リクエストが届いていない");
    assert!(request.head.starts_with("POST /openai/v1/chat/completions"));
    assert!(request
        .head
        .to_lowercase()
        .contains("authorization: bearer gsk_test"));

    let value: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(value["model"], "meta-llama/llama-4-scout-17b-16e-instruct");
    assert_eq!(value["stream"], false);
    assert!(value["stop"].is_null());
    let url = value["messages"][0]["content"][1]["image_url"]["url"]
        .as_str()
        .unwrap();
    assert!(url.starts_with("data:image/jpeg;base64,/9j/"));
    assert!(!url.contains('\n'));
}

/// 返されたテキストは加工されない
#[tokio::test]
async fn test_result_is_verbatim() {
    let content = "\n  # Title\n\n**bold** and `code`\t\n";
    let (endpoint, _captured) = serve_once("200 OK", &completion(content)).await;
    let client = client_for(endpoint);
    let mut session = Session::new();
    session.select_file(jpeg(16));

    session.analyze(&client).await;
    assert_eq!(session.result(), Some(content));
}

/// HTTPエラーは共通文言になる
#[tokio::test]
async fn test_http_error_status() {
    let (endpoint, _captured) = serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#,
    )
    .await;
    let client = client_for(endpoint);

    let result = client.analyze_image(&jpeg(16)).await;
    assert!(matches!(result, Err(Error::Status { status: 401, .. })));

    let mut session = Session::new();
    session.select_file(jpeg(16));
    let (endpoint, _captured) = serve_once("500 Internal Server Error", "{}").await;
    session.analyze(&client_for(endpoint)).await;
    assert_eq!(session.error(), Some(GENERIC_FAILURE_MESSAGE));
}

/// 不正なJSONは共通文言になる
#[tokio::test]
async fn test_malformed_json() {
    let (endpoint, _captured) = serve_once("200 OK", "<html>upstream error</html>").await;
    let client = client_for(endpoint);
    let mut session = Session::new();
    session.select_file(jpeg(16));

    session.analyze(&client).await;
    assert_eq!(session.error(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(matches!(session.state(), OperationState::Failed(_)));
}

/// 接続拒否は共通文言になる
#[tokio::test]
async fn test_network_rejection() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}/openai/v1/chat/completions", addr));
    let result = client.analyze_image(&jpeg(16)).await;
    assert!(matches!(result, Err(Error::Transport(_))));

    let mut session = Session::new();
    session.select_file(jpeg(16));
    session.analyze(&client).await;
    assert_eq!(session.error(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(!session.is_loading());
}

/// 未選択で解析してもリクエストは送られない
#[tokio::test]
async fn test_no_file_makes_no_request() {
    let (endpoint, captured) = serve_once("200 OK", &completion("unused")).await;
    let client = client_for(endpoint);
    let mut session: Session<InMemoryImage> = Session::new();

    assert!(!session.analyze(&client).await);
    assert_eq!(session.error(), Some(VALIDATION_MESSAGE));

    // サーバは接続を受けていない
    let waited = tokio::time::timeout(std::time::Duration::from_millis(200), captured).await;
    assert!(waited.is_err());
}

/// APIキー未設定でもクライアントは作れ、解析時に共通文言になる
#[tokio::test]
async fn test_missing_api_key() {
    let client = native_client(ClientConfig::default());
    assert!(!client.config().has_api_key());

    let mut session = Session::new();
    session.select_file(jpeg(16));
    session.analyze(&client).await;
    assert_eq!(session.error(), Some(GENERIC_FAILURE_MESSAGE));
}

/// ディスク上の画像を読み込んで解析
#[tokio::test]
async fn test_describe_file_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("cat.PNG");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

    let (endpoint, captured) = serve_once("200 OK", &completion("A cat.")).await;
    let client = client_for(endpoint);

    let text = describe_file(&client, &path).await.expect("解析失敗");
    assert_eq!(text, "A cat.");

    let request = captured.await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        value["messages"][0]["content"][1]["image_url"]["url"],
        "data:image/png;base64,iVBORw0KGgo="
    );
}

/// 対応外の拡張子は読み込まない
#[tokio::test]
async fn test_describe_file_unsupported() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let client = client_for("http://127.0.0.1:9/unused".to_string());
    let err = describe_file(&client, &path).await.unwrap_err();
    assert!(matches!(err, image_describe::error::DescribeError::UnsupportedImage(_)));
}
