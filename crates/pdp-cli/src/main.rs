mod product;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pdp-cli")]
#[command(about = "Product detail page loader command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the page payload for one product handle and print it as JSON.
    Product {
        /// Product handle, e.g. `classic-tee`.
        handle: String,

        /// Selected option as `Name=Value`; repeat to select several.
        #[arg(short = 'o', long = "option", value_parser = product::parse_option_arg)]
        options: Vec<(String, String)>,

        /// Pretty-print the JSON payload.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = pdp_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Product {
            handle,
            options,
            pretty,
        } => product::run_product(&config, &handle, options, pretty).await,
    }
}
