mod render;

use clap::{Parser, Subcommand};
use pricecmp_client::{submit_search, OfferSource};
use pricecmp_core::{filter_suggestions, AppConfig, SearchState};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pricecmp")]
#[command(about = "Compare grocery offers by price")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search offers for a product name or SKU, cheapest first
    Search {
        /// Product name, UPC, or SKU
        query: String,
        /// Use the bundled dataset regardless of configuration
        #[arg(long, conflicts_with = "live")]
        mock: bool,
        /// Call the search API regardless of configuration
        #[arg(long)]
        live: bool,
        /// Print the ranked offers as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List product suggestions matching a partial query
    Suggest {
        /// Partial product name; lists everything when omitted
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search {
            query,
            mock,
            live,
            json,
        }) => {
            let mut config = pricecmp_core::load_app_config()?;
            init_tracing(&config)?;
            apply_source_override(&mut config, mock, live);
            run_search(&config, &query, json).await?;
        }
        Some(Commands::Suggest { query }) => {
            run_suggest(query.as_deref().unwrap_or_default());
        }
        None => println!("usage: pricecmp search <QUERY> | pricecmp suggest [QUERY]"),
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output on stdout stay clean.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Applies `--mock` / `--live` on top of `PRICECMP_USE_MOCK_DATA`.
fn apply_source_override(config: &mut AppConfig, mock: bool, live: bool) {
    if mock {
        config.use_mock_data = true;
    } else if live {
        config.use_mock_data = false;
    }
}

/// Run one search and print the ranked offers.
///
/// # Errors
///
/// Returns an error if the source cannot be built or the search fails.
async fn run_search(config: &AppConfig, query: &str, as_json: bool) -> anyhow::Result<()> {
    let source = OfferSource::from_config(config).map_err(|e| {
        tracing::error!(error = %e, "failed to build offer source");
        anyhow::anyhow!("failed to build offer client: {e}")
    })?;

    let state = submit_search(
        SearchState::new(query),
        None,
        &source,
        &config.field_chains(),
    )
    .await;

    if let Some(message) = state.error_message() {
        tracing::error!(query, error = message, "search failed");
        anyhow::bail!("search failed: {message}");
    }

    let sorted = state.sorted_results();
    let cheapest = state.cheapest_offer_id();
    tracing::debug!(
        offers = sorted.len(),
        cheapest = cheapest.as_deref().unwrap_or("none"),
        "rendering results"
    );
    if as_json {
        println!("{}", render::render_json(&sorted, cheapest.as_deref())?);
    } else {
        print!("{}", render::render_table(&sorted, cheapest.as_deref()));
    }
    Ok(())
}

fn run_suggest(query: &str) {
    let matches = filter_suggestions(query);
    if matches.is_empty() {
        println!("no suggestions match '{}'", query.trim());
        return;
    }
    for item in matches {
        println!("{item}");
    }
}
