//! プログレスバーコンポーネント
//!
//! 応答はストリーミングされないため進捗率は出さず、常に流れるバーを表示する

use leptos::prelude::*;

#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div class="progress-fill progress-indeterminate" style="width: 100%" />
            </div>
        </div>
    }
}
