use clap::{Parser, Subcommand};
use movie_search_common::DEFAULT_QUERY;

#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "OMDb movie search from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// タイトルで検索して1ページ分を表示
    Search {
        /// 検索語
        #[arg(required = true)]
        title: String,

        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// IMDb IDで詳細を表示
    Show {
        /// IMDb ID（例: tt0372784）
        #[arg(required = true)]
        id: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に検索・ページ送り・詳細表示
    Browse {
        /// 最初の検索語
        #[arg(default_value = DEFAULT_QUERY)]
        query: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
