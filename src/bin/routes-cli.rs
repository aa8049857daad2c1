use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

use route_sync::fetch::{ConfigFetcher, HttpFetcher};
use route_sync::routes::parser;

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspection CLI for routes-document sources", long_about = None)]
struct Cli {
    /// URL of the routes document.
    #[arg(short, long, default_value = "http://127.0.0.1:9000/routes.json")]
    url: String,

    /// Fetch timeout in milliseconds.
    #[arg(short, long, default_value_t = 3000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the routes document and print the raw body
    Fetch,
    /// Fetch and parse the routes document, reporting each route
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let source = Url::parse(&cli.url)?;
    let fetcher = HttpFetcher::new(Duration::from_millis(cli.timeout_ms))?;
    let body = fetcher.fetch(&source).await?;

    match cli.command {
        Commands::Fetch => {
            println!("{}", body);
        }
        Commands::Validate => match parser::parse(&body) {
            Ok(routes) => {
                println!("{}: {} route(s) OK", source, routes.len());
                for route in &routes {
                    println!("  {} -> {}", route.id, route.destination);
                }
            }
            Err(e) => {
                eprintln!("{}: invalid routes document: {}", source, e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
