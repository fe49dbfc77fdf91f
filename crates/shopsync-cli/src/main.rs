mod run;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use shopsync_core::BatchSize;
use tracing_subscriber::EnvFilter;

/// Export active catalog products to a search index, one record per variant.
#[derive(Debug, Parser)]
#[command(name = "shopsync")]
#[command(about = "Sync catalog variants into a search index")]
struct Cli {
    /// Country code used for contextual pricing and publication (e.g. `US`).
    country: String,

    /// Locale whose `title` translation replaces the product title (e.g. `fr`).
    locale: String,

    /// Name of the search index to upsert into.
    index_name: String,

    /// Products per page, and variants per product, between 1 and 250.
    batch_size: BatchSize,

    /// Run rounds of concurrent batches instead of one page at a time.
    #[arg(long)]
    parallel: bool,

    /// Batches per round in parallel mode; defaults to `SHOPSYNC_PARALLEL_WIDTH`.
    #[arg(long, requires = "parallel", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    width: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Arguments are validated before any configuration or network access.
    let cli = Cli::parse();

    let config = shopsync_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    for var in config.missing_credentials() {
        tracing::warn!(var, "credential is not set; the API will likely reject requests");
    }

    run::run_sync(&cli, &config).await
}
