//! アップロードエリアコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, File};
use crate::app::SessionSignal;
use crate::browser_file::BrowserImage;

#[component]
pub fn UploadArea<F>(
    session: SessionSignal,
    file_input: NodeRef<Input>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(BrowserImage) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |_: Event| {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file_selected(BrowserImage::from(file));
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) if is_image(&file) => on_file_selected(BrowserImage::from(file)),
            Some(file) => log::debug!("Ignoring dropped non-image file: {}", file.name()),
            None => {}
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // 非表示のinputを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let preview = move || session.with(|s| s.preview().map(str::to_string));
    let has_file = move || session.with(|s| s.selected().is_some());

    view! {
        <input
            node_ref=file_input
            id="file-input"
            type="file"
            accept="image/*"
            class="d-none"
            on:change=on_change
        />
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {move || match preview() {
                Some(src) => view! {
                    <img src=src alt="Selected" class="preview" />
                }.into_any(),
                None if has_file() => view! {
                    <p class="text-muted">"Loading preview..."</p>
                }.into_any(),
                None => view! {
                    <div class="upload-icon">"📷"</div>
                    <p>"Click to select an image"</p>
                    <p class="text-muted">"Supports JPG, PNG, GIF"</p>
                }.into_any(),
            }}
        </div>
    }
}

/// ドロップされたファイルが画像か（ファイル選択の accept="image/*" 相当）
fn is_image(file: &File) -> bool {
    file.type_().starts_with("image/")
}
