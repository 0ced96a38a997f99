use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reuters_search::api::create_router;
use reuters_search::config::Config;
use reuters_search::data_models::{Method, SearchRequest};
use reuters_search::output;
use reuters_search::query_engine::{Navigation, QueryEngine};

/// Web frontend for the Reuters search backend.
#[derive(Parser)]
#[command(name = "reuters-search", version, about)]
struct Cli {
    /// Search backend endpoint (overrides SEARCH_BACKEND_URL)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the search pages over HTTP
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Run one search and print a page of results
    Search {
        query: String,

        #[arg(short, long, default_value = "tfidf")]
        method: Method,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut config = Config::from_env().context("Invalid configuration")?;
    if let Some(backend) = cli.backend {
        config.backend_url = backend;
    }

    let query_engine =
        QueryEngine::from_config(&config).context("Failed to build the search backend client")?;

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            let app = create_router(Arc::new(query_engine));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            tracing::info!(%addr, backend = %config.backend_url, "serving reuters search");
            axum::serve(listener, app).await.context("Server error")?;
        }
        Command::Search {
            query,
            method,
            page,
            json,
        } => {
            let navigation = if page > 1 {
                Navigation::Page(page)
            } else {
                Navigation::NewSearch
            };
            let view = query_engine
                .results(SearchRequest::new(query, method), navigation)
                .await;
            let rendered = if json {
                output::format_json(&view)?
            } else {
                output::format_human(&view)
            };
            println!("{rendered}");
        }
    }
    Ok(())
}
