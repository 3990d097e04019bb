//! 検索画面
//!
//! `SearchMachine` をシグナルに載せ、遷移が返したチケットだけを実行する。
//! 応答は連番付きで機械に戻すので、追い越された応答は反映されない。

use leptos::prelude::*;
use leptos::task::spawn_local;
use movie_search_common::{Error, FetchTicket, MovieApi, SearchMachine, SearchStatus};
use crate::api::OmdbFetch;
use crate::components::{
    search_bar::SearchBar,
    spinner::Spinner,
    movie_grid::MovieGrid,
    pagination::PaginationControls,
};

const NO_RESULTS_MESSAGE: &str = "No movies found.";

#[component]
pub fn SearchView() -> impl IntoView {
    let api = use_context::<OmdbFetch>();
    let machine = RwSignal::new(SearchMachine::default());

    // チケットを1件実行して結果を戻す
    let dispatch = move |ticket: FetchTicket| {
        let api = api.clone();
        spawn_local(async move {
            let result = match api {
                Some(api) => api.search(&ticket.request).await,
                None => Err(Error::Config("OMDb API key is not configured".into())),
            };
            // 画面を離れた後に届いた応答は捨てる
            let _ = machine.try_update(|m| m.complete(ticket.seq, result));
        });
    };

    // 初期検索語で最初の1ページを取得
    if let Some(ticket) = machine.try_update(|m| m.start()).flatten() {
        dispatch(ticket);
    }

    let on_input = move |text: String| machine.update(|m| m.set_draft(text));

    let on_submit = {
        let dispatch = dispatch.clone();
        move |_: ()| {
            if let Some(ticket) = machine.try_update(|m| m.submit()) {
                dispatch(ticket);
            }
        }
    };

    let on_page = {
        let dispatch = dispatch.clone();
        move |delta: i64| {
            if let Some(ticket) = machine.try_update(|m| m.change_page(delta)).flatten() {
                dispatch(ticket);
            }
        }
    };

    let draft = Signal::derive(move || machine.with(|m| m.draft().to_string()));
    let movies = Signal::derive(move || machine.with(|m| m.results().to_vec()));
    let pagination = Signal::derive(move || machine.with(|m| m.pagination()));
    let status = Memo::new(move |_| machine.with(|m| m.state().status()));

    view! {
        <div class="search-view">
            <SearchBar draft=draft on_input=on_input on_submit=on_submit />

            {move || match status.get() {
                SearchStatus::Idle => ().into_any(),
                SearchStatus::Loading => view! { <Spinner /> }.into_any(),
                SearchStatus::Loaded => {
                    let on_page = on_page.clone();
                    view! {
                        <MovieGrid movies=movies />
                        <PaginationControls pagination=pagination on_page=on_page />
                    }.into_any()
                }
                SearchStatus::Empty | SearchStatus::Failed => view! {
                    <p class="status-message">{NO_RESULTS_MESSAGE}</p>
                }.into_any(),
            }}
        </div>
    }
}
