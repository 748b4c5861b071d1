//! メインアプリケーションコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use image_describe_common::{AnalysisClient, ImageSource, Session};
use crate::api::groq::FetchTransport;
use crate::browser_file::BrowserImage;
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    file_actions::FileActions,
    result_panel::ResultPanel,
};
use crate::config;

/// 画面状態のシグナル（web_sys::Fileを含むためスレッドローカル）
pub type SessionSignal = RwSignal<Session<BrowserImage>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(Session::new());
    let file_input: NodeRef<Input> = NodeRef::new();
    let client = AnalysisClient::new(config::client_config(), FetchTransport);

    // ファイル選択ハンドラ
    let on_file_selected = move |image: BrowserImage| {
        let Some(ticket) = session.try_update(|s| s.select_file(image.clone())) else {
            return;
        };

        // プレビューは非同期で読み込む
        spawn_local(async move {
            match image.read_data_url().await {
                Ok(data_url) => session.update(|s| {
                    s.set_preview(ticket, data_url);
                }),
                Err(e) => log::error!("Failed to read preview for {}: {}", image.name(), e),
            }
        });
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let Some(ticket) = session.try_update(|s| s.begin_analyze()).flatten() else {
            return;
        };
        let Some(image) = session.with_untracked(|s| s.selected().cloned()) else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.analyze_image(&image).await;
            session.update(|s| {
                s.finish_analyze(ticket, outcome);
            });
        });
    };

    // リセットハンドラ
    let on_reset = move |_: ()| {
        session.update(|s| s.reset());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="columns">
                <section class="card">
                    <h2 class="card-title">"Upload Image"</h2>
                    <UploadArea
                        session=session
                        file_input=file_input
                        on_file_selected=on_file_selected
                    />
                    <FileActions
                        session=session
                        on_analyze=on_analyze
                        on_reset=on_reset
                    />
                </section>

                <section class="card">
                    <h2 class="card-title">"Analysis Results"</h2>
                    <ResultPanel session=session />
                </section>
            </div>
        </div>
    }
}
