//! トップページ（一覧へのリンクのみ）

use leptos::prelude::*;
use movie_search_common::Route;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <a class="btn btn-primary" href=Route::Search.href()>"Movies"</a>
        </div>
    }
}
