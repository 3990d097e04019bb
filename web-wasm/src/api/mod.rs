//! 外部API

pub mod omdb;

pub use omdb::OmdbFetch;
