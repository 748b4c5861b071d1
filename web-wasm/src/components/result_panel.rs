//! 解析結果パネル
//!
//! 解析中・エラー・成功・案内のうち常に1つだけを表示する

use leptos::prelude::*;
use image_describe_common::{render_markdown, Panel};
use crate::app::SessionSignal;
use crate::components::progress_bar::ProgressBar;

/// 表示内容（シグナルの借用を外すため所有型に変換）
#[derive(Clone, PartialEq)]
enum Shown {
    Loading,
    Error(String),
    Success(String),
    Placeholder { has_file: bool },
}

impl From<Panel<'_>> for Shown {
    fn from(panel: Panel<'_>) -> Self {
        match panel {
            Panel::Loading => Shown::Loading,
            Panel::Error(message) => Shown::Error(message.to_string()),
            Panel::Success(text) => Shown::Success(render_markdown(text)),
            Panel::Placeholder { has_file } => Shown::Placeholder { has_file },
        }
    }
}

#[component]
pub fn ResultPanel(session: SessionSignal) -> impl IntoView {
    let shown = Memo::new(move |_| session.with(|s| Shown::from(s.panel())));
    let state = move || session.with(|s| s.state().as_str());

    view! {
        <div class="result-panel" data-state=state>
            {move || match shown.get() {
                Shown::Loading => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p class="text-muted">"Analyzing your image..."</p>
                        <ProgressBar />
                    </div>
                }.into_any(),
                Shown::Error(message) => view! {
                    <div class="alert alert-danger">"⚠ " {message}</div>
                }.into_any(),
                Shown::Success(html) => view! {
                    <div class="result-container">
                        <div class="alert alert-success">"✔ Analysis completed successfully!"</div>
                        <div class="result-text" inner_html=html></div>
                    </div>
                }.into_any(),
                Shown::Placeholder { has_file } => view! {
                    <div class="placeholder text-muted">
                        <div class="placeholder-icon">"🖼"</div>
                        <p>
                            {if has_file {
                                "Click \"Analyze Image\" to describe the selected image"
                            } else {
                                "Select an image to see analysis results here"
                            }}
                        </p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
