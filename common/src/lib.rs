//! Movie Search Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態機械・OMDbスキーマ

pub mod types;
pub mod error;
pub mod wire;
pub mod request;
pub mod pagination;
pub mod search;
pub mod detail;
pub mod route;
pub mod api;

pub use types::{MediaType, MovieDetail, MovieSummary, Poster, NOT_AVAILABLE, NO_POSTER_PLACEHOLDER};
pub use error::{Error, Result};
pub use wire::{parse_detail_response, parse_search_response, DetailOutcome, SearchOutcome};
pub use request::{ApiConfig, DetailRequest, SearchRequest, DEFAULT_BASE_URL};
pub use pagination::{total_pages, Pagination, PAGE_SIZE};
pub use search::{
    Completion, FetchTicket, SearchMachine, SearchState, SearchStatus, DEFAULT_QUERY,
};
pub use detail::{DetailMachine, DetailState, DetailTicket};
pub use route::Route;
pub use api::{run_detail, run_search, MovieApi};
