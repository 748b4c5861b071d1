//! 解析結果（Markdown）をHTMLに変換

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// リンク・画像で許可するスキーム（スキームなしの相対パスも可）
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// MarkdownをHTMLに変換する
///
/// モデル出力に含まれる生のHTMLはタグとして解釈せず、テキストとしてエスケープする。
/// `javascript:` などのリンク先は空文字に置き換える。
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        log::debug!("Dropping unsafe link target: {}", url);
        CowStr::Borrowed("")
    }
}

/// スキームが許可リストにあるか、スキームを持たない相対URLか
///
/// ブラウザはスキーム中の空白・制御文字を無視するため、除去してから判定する。
fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    match normalized.find([':', '/', '?', '#']) {
        Some(pos) if normalized[pos..].starts_with(':') => {
            let scheme = normalized[..pos].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}
