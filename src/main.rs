use clap::Parser;
use movie_search::{browse, cli, client, config, error, logging, render};
use cli::{Cli, Commands};
use client::OmdbClient;
use config::Config;
use error::Result;
use movie_search_common::{
    DetailOutcome, DetailRequest, MovieApi, Pagination, SearchOutcome, SearchRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { title, page, json } => {
            let client = OmdbClient::new(config.api_config()?)?;
            let request = SearchRequest::new(title, page);

            match client.search(&request).await? {
                SearchOutcome::Found { results, total_results } if !results.is_empty() => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                    } else {
                        let pagination = Pagination::from_total_results(request.page, total_results);
                        println!("{} results for \"{}\"\n", total_results, request.title);
                        println!("{}", render::results_block(&results, pagination));
                    }
                }
                _ => println!("{}", render::NO_RESULTS_MESSAGE),
            }
        }

        Commands::Show { id, json } => {
            let client = OmdbClient::new(config.api_config()?)?;

            match client.lookup(&DetailRequest::new(id)).await? {
                DetailOutcome::Found(detail) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&detail)?);
                    } else {
                        println!("{}", render::detail_block(&detail));
                    }
                }
                DetailOutcome::NotFound { .. } => println!("{}", render::NOT_FOUND_MESSAGE),
            }
        }

        Commands::Browse { query } => {
            let client = OmdbClient::new(config.api_config()?)?;
            browse::run_browse(&client, &query).await?;
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.base_url);
                println!(
                    "  APIキー: {}",
                    config.masked_api_key().unwrap_or_else(|| "未設定".to_string())
                );
                if std::env::var(config::API_KEY_ENV).is_ok() {
                    println!("  ({} が優先されます)", config::API_KEY_ENV);
                }
            }
        }
    }

    Ok(())
}
