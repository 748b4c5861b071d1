//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Image Analysis"</h1>
            <p class="subtitle">"Upload an image to analyze its contents using AI"</p>
        </header>
    }
}
