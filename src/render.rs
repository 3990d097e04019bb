//! 端末向けの表示整形
//!
//! 文字列を返すだけにしてテストできるようにしている。

use movie_search_common::{DetailState, MovieDetail, MovieSummary, Pagination, SearchState};

pub const NOT_FOUND_MESSAGE: &str = "Movie not found 😢";
pub const NO_RESULTS_MESSAGE: &str = "No movies found.";
pub const FAILED_MESSAGE: &str = "Search failed. See log for details.";

/// 一覧の1行: "  3. Batman Begins (2005) [movie] tt0372784"
pub fn summary_line(index: usize, movie: &MovieSummary) -> String {
    let year = if movie.year.is_empty() {
        String::new()
    } else {
        format!(" ({})", movie.year)
    };
    format!("{:>3}. {}{} [{}] {}", index, movie.title, year, movie.kind, movie.id)
}

pub fn results_block(results: &[MovieSummary], pagination: Pagination) -> String {
    let mut lines: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, movie)| summary_line(i + 1, movie))
        .collect();
    lines.push(String::new());
    lines.push(pagination_line(pagination));
    lines.join("\n")
}

/// "◀ Prev | Page 1 of 3 | Next ▶"（無効側は伏せる）
pub fn pagination_line(pagination: Pagination) -> String {
    let prev = if pagination.can_prev() { "◀ Prev" } else { "      " };
    let next = if pagination.can_next() { "Next ▶" } else { "      " };
    format!("{} | {} | {}", prev, pagination.label(), next)
}

pub fn search_state_block(state: &SearchState, pagination: Pagination) -> String {
    match state {
        SearchState::Idle => String::new(),
        SearchState::Loading => "Loading...".to_string(),
        SearchState::Loaded { results, .. } => results_block(results, pagination),
        SearchState::Empty => NO_RESULTS_MESSAGE.to_string(),
        SearchState::Failed => FAILED_MESSAGE.to_string(),
    }
}

pub fn detail_block(detail: &MovieDetail) -> String {
    let mut lines = vec![detail.title.clone()];
    let byline = detail.byline();
    if !byline.is_empty() {
        lines.push(byline);
    }
    lines.push(String::new());
    lines.push(format!("Genre: {}", detail.genre));
    lines.push(format!("Director: {}", detail.director));
    lines.push(format!("Actors: {}", detail.actors));
    lines.push(format!("Plot: {}", detail.plot));
    lines.push(format!("IMDB Rating: ⭐ {}", detail.rating));
    for (label, value) in detail.extra_fields() {
        lines.push(format!("{}: {}", label, value));
    }
    if let Some(url) = detail.poster.url() {
        lines.push(format!("Poster: {}", url));
    }
    lines.join("\n")
}

pub fn detail_state_block(state: &DetailState) -> String {
    match state {
        DetailState::Loading => "Loading...".to_string(),
        DetailState::Found(detail) => detail_block(detail),
        DetailState::Unspecified | DetailState::NotFound | DetailState::Error => {
            NOT_FOUND_MESSAGE.to_string()
        }
    }
}
