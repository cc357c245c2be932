mod commands;
mod output;
mod settings;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "itunes")]
#[command(about = "Search and look up items in the iTunes catalog")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by term
    Search(commands::search::SearchArgs),
    /// Look up items by iTunes ID, AMG ID, UPC, ISBN or bundle ID
    Lookup(commands::lookup::LookupArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("itunes=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Settings::from_env()?.build_client()?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &cli.output).await?,
        Commands::Lookup(args) => commands::lookup::run(args, &client, &cli.output).await?,
    }

    Ok(())
}
