//! 詳細カード

use leptos::prelude::*;
use movie_search_common::MovieDetail;
use crate::components::poster::PosterImage;

#[component]
pub fn MovieDetailCard(detail: MovieDetail) -> impl IntoView {
    let extras: Vec<(&'static str, String)> = detail
        .extra_fields()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();

    view! {
        <div class="movie-detail">
            <PosterImage poster=detail.poster.clone() alt=detail.title.clone() class="detail-poster" />
            <div class="detail-body">
                <h1>{detail.title.clone()}</h1>
                <p class="text-muted">{detail.byline()}</p>
                <p><span class="label">"Genre:"</span>" "{detail.genre.clone()}</p>
                <p><span class="label">"Director:"</span>" "{detail.director.clone()}</p>
                <p><span class="label">"Actors:"</span>" "{detail.actors.clone()}</p>
                <p><span class="label">"Plot:"</span>" "{detail.plot.clone()}</p>
                <p><span class="label">"IMDB Rating:"</span>" ⭐ "{detail.rating.clone()}</p>
                {extras
                    .into_iter()
                    .map(|(label, value)| view! {
                        <p class="detail-extra"><span class="label">{label}":"</span>" "{value}</p>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
