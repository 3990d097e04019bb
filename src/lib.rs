//! Movie Search（端末版）
//!
//! ブラウザ版と同じ状態機械を reqwest クライアントで動かす。

pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
