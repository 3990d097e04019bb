//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use movie_search_common::Route;
use crate::api::OmdbFetch;
use crate::components::{
    header::Header,
    home::Home,
    search_view::SearchView,
    detail_view::DetailView,
};

/// 表示する画面（詳細IDの変化では画面を作り直さない）
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Search,
    Detail,
    NotFound,
}

impl Screen {
    fn of(route: &Route) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::Search => Screen::Search,
            Route::Detail(_) => Screen::Detail,
            Route::NotFound => Screen::NotFound,
        }
    }
}

fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::parse(&hash)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    match crate::config::load_api_config() {
        Ok(config) => provide_context(OmdbFetch::new(config)),
        Err(e) => gloo::console::error!(format!("OMDb API key is not configured: {}", e)),
    }

    // ハッシュの変化をルートに反映
    let (route, set_route) = signal(current_route());
    gloo::events::EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
        set_route.set(current_route());
    })
    .forget();

    let screen = Memo::new(move |_| Screen::of(&route.get()));
    let detail_id = Signal::derive(move || route.get().detail_id().map(str::to_string));

    view! {
        <div class="container">
            <Header />

            {move || match screen.get() {
                Screen::Home => view! { <Home /> }.into_any(),
                Screen::Search => view! { <SearchView /> }.into_any(),
                Screen::Detail => view! { <DetailView id=detail_id /> }.into_any(),
                Screen::NotFound => view! {
                    <div class="status-message">
                        <p>"Page not found"</p>
                        <a href=Route::Search.href()>"Back to search"</a>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
