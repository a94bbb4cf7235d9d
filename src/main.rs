use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use medium_feeder::cli::Cli;
use medium_feeder::config::Config;
use medium_feeder::errors::{FeederError, FeederResult};
use medium_feeder::services::{ExportService, FetchService};
use medium_feeder::sources::{locator, HttpFeedClient};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if matches!(e, FeederError::Usage) {
            println!("{}", Cli::command().render_usage());
            println!("Example: medium-feeder johndoe my-publication another-publication");
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> FeederResult<()> {
    Config::load_env();

    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;
    let sources = locator::locate(&config)?;

    println!("Fetching Medium articles...");

    let fetch_service = FetchService::new(HttpFeedClient::new());
    let items = fetch_service.fetch_all(&sources);

    if items.is_empty() {
        println!("No articles found");
        return Ok(());
    }

    let export_service = ExportService::new(&config.output_dir);
    let saved = export_service.save(items, config.handle.as_deref(), &config.organizations)?;

    println!("\nSummary:");
    println!("Total articles found: {}", saved);
    if let Some(handle) = &config.handle {
        println!("User: @{}", handle);
    }
    if !config.organizations.is_empty() {
        println!("Organizations: {}", config.organizations.join(", "));
    }

    Ok(())
}
