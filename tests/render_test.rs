//! 端末表示の整形テスト

use movie_search::render;
use movie_search_common::{
    DetailState, MediaType, MovieDetail, MovieSummary, Pagination, Poster, SearchState,
};

fn begins() -> MovieSummary {
    MovieSummary {
        id: "tt0372784".into(),
        title: "Batman Begins".into(),
        year: "2005".into(),
        poster: Poster::Missing,
        kind: MediaType::Movie,
    }
}

#[test]
fn test_summary_line() {
    assert_eq!(
        render::summary_line(1, &begins()),
        "  1. Batman Begins (2005) [movie] tt0372784"
    );
}

#[test]
fn test_pagination_line_hides_disabled_controls() {
    let first = render::pagination_line(Pagination::new(1, 3));
    assert!(!first.contains("Prev"));
    assert!(first.contains("Next"));
    assert!(first.contains("Page 1 of 3"));

    let last = render::pagination_line(Pagination::new(3, 3));
    assert!(last.contains("Prev"));
    assert!(!last.contains("Next"));
}

#[test]
fn test_search_state_messages() {
    let pagination = Pagination::new(1, 0);
    assert_eq!(
        render::search_state_block(&SearchState::Empty, pagination),
        render::NO_RESULTS_MESSAGE
    );
    assert_eq!(
        render::search_state_block(&SearchState::Failed, pagination),
        render::FAILED_MESSAGE
    );

    let loaded = SearchState::Loaded { results: vec![begins()], total_results: 1 };
    let block = render::search_state_block(&loaded, Pagination::new(1, 1));
    assert!(block.contains("Batman Begins"));
    assert!(block.contains("Page 1 of 1"));
}

#[test]
fn test_detail_block() {
    let detail = MovieDetail {
        id: "tt0372784".into(),
        title: "Batman Begins".into(),
        year: "2005".into(),
        runtime: "140 min".into(),
        genre: "Action".into(),
        director: "Christopher Nolan".into(),
        actors: "Christian Bale".into(),
        plot: "Bruce learns to fight.".into(),
        rating: "8.2".into(),
        rated: Some("PG-13".into()),
        ..Default::default()
    };
    let block = render::detail_block(&detail);
    assert!(block.starts_with("Batman Begins\n2005 • 140 min"));
    assert!(block.contains("Director: Christopher Nolan"));
    assert!(block.contains("IMDB Rating: ⭐ 8.2"));
    assert!(block.contains("Rated: PG-13"));
    assert!(!block.contains("Poster:"));
}

#[test]
fn test_detail_state_not_found() {
    assert_eq!(render::detail_state_block(&DetailState::NotFound), render::NOT_FOUND_MESSAGE);
    assert_eq!(render::detail_state_block(&DetailState::Unspecified), render::NOT_FOUND_MESSAGE);
    assert_eq!(render::detail_state_block(&DetailState::Error), render::NOT_FOUND_MESSAGE);
}
