//! UIコンポーネント

pub mod header;
pub mod home;
pub mod search_bar;
pub mod spinner;
pub mod poster;
pub mod movie_grid;
pub mod pagination;
pub mod movie_detail;
pub mod search_view;
pub mod detail_view;
