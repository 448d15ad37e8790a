mod places;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placesearch_client::PlacesService;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placesearch")]
#[command(about = "Search places and show their details")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List autocomplete predictions for free-text input
    Search {
        input: String,
        /// Place type filter, e.g. `geocode` or `(cities)`
        #[arg(long = "type", default_value = "all")]
        place_type: String,
        /// Component filter, e.g. `country:de`
        #[arg(long, default_value = "all")]
        region: String,
        /// Show details for the n-th prediction (1-based)
        #[arg(long)]
        select: Option<usize>,
        /// Write the selected place's icon to this path
        #[arg(long, requires = "select")]
        save_icon: Option<PathBuf>,
    },
    /// Show details for a place id
    Details {
        place_id: String,
        /// Write the place's icon to this path
        #[arg(long)]
        save_icon: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = placesearch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let service = PlacesService::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;

    match cli.command {
        Commands::Search {
            input,
            place_type,
            region,
            select,
            save_icon,
        } => {
            let args = places::SearchArgs {
                input,
                place_type,
                region,
                select,
            };
            places::run_search(&service, args, save_icon.as_deref()).await
        }
        Commands::Details {
            place_id,
            save_icon,
        } => places::run_details(&service, &place_id, save_icon.as_deref()).await,
    }
}
