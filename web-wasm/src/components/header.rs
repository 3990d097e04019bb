//! ヘッダーコンポーネント

use leptos::prelude::*;
use movie_search_common::Route;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1><a href=Route::Search.href()>"Movie Search"</a></h1>
        </header>
    }
}
