//! ポスター画像（無い・読めない場合はプレースホルダ）

use leptos::prelude::*;
use movie_search_common::{Poster, NO_POSTER_PLACEHOLDER};
use web_sys::HtmlImageElement;

#[component]
pub fn PosterImage(
    poster: Poster,
    alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let src = poster.src_or(NO_POSTER_PLACEHOLDER).to_string();

    view! {
        <img
            class=class
            src=src
            alt=alt
            on:error=move |ev| {
                let img: HtmlImageElement = event_target(&ev);
                // プレースホルダ自体が読めない場合に再発火し続けないように
                if !img.src().ends_with(NO_POSTER_PLACEHOLDER) {
                    img.set_src(NO_POSTER_PLACEHOLDER);
                }
            }
        />
    }
}
