//! 選択ファイル情報と操作ボタン

use leptos::prelude::*;
use image_describe_common::{format_megabytes, ImageSource};
use crate::app::SessionSignal;

#[component]
pub fn FileActions<FA, FR>(
    session: SessionSignal,
    on_analyze: FA,
    on_reset: FR,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_loading = move || session.with(|s| s.is_loading());
    let can_analyze = move || session.with(|s| s.can_analyze());
    let file_name = move || {
        session.with(|s| s.selected().map(|f| f.name().to_string()).unwrap_or_default())
    };
    let file_size = move || {
        session.with(|s| s.selected().map(|f| format_megabytes(f.size())).unwrap_or_default())
    };

    view! {
        <Show when=move || session.with(|s| s.can_reset())>
            <div class="badges">
                <span class="badge badge-secondary">"📄 " {file_name}</span>
                <span class="badge badge-info">{file_size}</span>
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary btn-large"
                    disabled=move || !can_analyze()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    {move || if is_loading() { "Analyzing..." } else { "Analyze Image" }}
                </button>

                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Reset"
                </button>
            </div>
        </Show>
    }
}
