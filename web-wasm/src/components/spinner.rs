//! 読み込み中スピナー

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
