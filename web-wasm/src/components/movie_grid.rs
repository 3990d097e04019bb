//! 検索結果グリッド

use leptos::prelude::*;
use movie_search_common::{MovieSummary, Route};
use crate::components::poster::PosterImage;

#[component]
pub fn MovieGrid(movies: Signal<Vec<MovieSummary>>) -> impl IntoView {
    view! {
        <div class="movie-grid">
            <For
                each=move || movies.get().into_iter().enumerate()
                key=|(index, movie)| card_key(*index, movie)
                children=move |(_, movie)| view! { <MovieCard movie=movie /> }
            />
        </div>
    }
}

/// 同じページに同じIDが2回来ることがあるので位置込みでキーにする
fn card_key(index: usize, movie: &MovieSummary) -> (usize, String) {
    (index, movie.id.clone())
}

#[component]
fn MovieCard(movie: MovieSummary) -> impl IntoView {
    let href = Route::Detail(movie.id.clone()).href();

    view! {
        <a class="movie-card" href=href>
            <PosterImage poster=movie.poster.clone() alt=movie.title.clone() class="movie-poster" />
            <h3>{movie.title.clone()}</h3>
            <p class="text-muted">{movie.year.clone()}</p>
        </a>
    }
}
