use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use amazon_scraper::{Config, ProductSearch, archiver, render, server};

#[derive(Parser)]
#[command(name = "amazon_scraper", about = "Amazon search-result scraper and API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the scrape API and web client (default)
    Serve {
        /// Bind address, overrides HOST
        #[arg(long)]
        host: Option<String>,
        /// Port, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Scrape one keyword and print the products
    Search {
        keyword: String,
        /// Also write the products to this JSON file
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            let mut config = Config::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::run(config).await
        }
        Commands::Search { keyword, out } => {
            let search_base_url = Config::search_base_url_from_env();
            let search = ProductSearch::new(&search_base_url)?;
            info!(url = %search.fetcher().search_url(&keyword), "searching");
            let products = search.search(&keyword).await?;

            if products.is_empty() {
                println!("No products found.");
            }
            for product in &products {
                println!("{}", render::card(product));
            }

            if let Some(out) = out {
                archiver::save_to_file(&products, &out)?;
                println!("{} products archived to {out}.", products.len());
            }
            Ok(())
        }
    }
}
