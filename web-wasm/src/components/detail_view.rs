//! 詳細画面

use leptos::prelude::*;
use leptos::task::spawn_local;
use movie_search_common::{DetailMachine, DetailState, Error, MovieApi, Route};
use crate::api::OmdbFetch;
use crate::components::{spinner::Spinner, movie_detail::MovieDetailCard};

const NOT_FOUND_MESSAGE: &str = "Movie not found 😢";

#[component]
pub fn DetailView(id: Signal<Option<String>>) -> impl IntoView {
    let api = use_context::<OmdbFetch>();
    let machine = RwSignal::new(DetailMachine::new());

    // IDが変わるたびに取得し直す
    Effect::new(move |_| {
        let current = id.get();
        let Some(ticket) = machine
            .try_update(|m| m.activate(current.as_deref()))
            .flatten()
        else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let result = match api {
                Some(api) => api.lookup(&ticket.request).await,
                None => Err(Error::Config("OMDb API key is not configured".into())),
            };
            let _ = machine.try_update(|m| m.complete(ticket.seq, result));
        });
    });

    view! {
        <div class="detail-view">
            <a class="back-link" href=Route::Search.href()>"← Back to search"</a>

            {move || match machine.with(|m| m.state().clone()) {
                DetailState::Loading => view! { <Spinner /> }.into_any(),
                DetailState::Found(detail) => view! { <MovieDetailCard detail=detail /> }.into_any(),
                DetailState::Unspecified | DetailState::NotFound | DetailState::Error => view! {
                    <p class="status-message">{NOT_FOUND_MESSAGE}</p>
                }.into_any(),
            }}
        </div>
    }
}
